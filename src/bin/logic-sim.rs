//! Logic Circuit Simulator - Command Line Interface
//!
//! Compiles one expression and prints the requested artefacts as text or
//! JSON.

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use logic_sim::{Circuit, ConfigError, Options};
use prettytable::{format::Alignment, Cell, Row, Table};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Command {
    /// Everything below (default)
    All,
    /// Validate only and print the normalised expression
    Check,
    /// Print the truth table
    Table,
    /// Print node positions and wire routes
    Layout,
    /// Print the narrated execution steps
    Steps,
    /// Describe the gates the expression uses
    Gates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "logic-sim")]
#[command(about = "Compile a boolean expression into a truth table, circuit layout and execution steps", long_about = None)]
#[command(version)]
struct Args {
    /// Expression such as "(a and b) or (not c)"
    #[arg(value_name = "EXPRESSION")]
    expression: String,

    /// What to produce
    #[arg(short = 'D', long = "do", value_enum, default_value = "all")]
    command: Command,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value = "text")]
    output_format: OutputFormat,

    /// JSON options file (layout geometry and variable limits)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Provide execution summary
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = match &args.config {
        Some(path) => match Options::from_file(path) {
            Ok(options) => options,
            Err(e @ ConfigError::Io { .. }) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error in config file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Options::default(),
    };

    if args.summary {
        eprintln!("logic-sim {}", env!("CARGO_PKG_VERSION"));
        eprintln!("Expression: {}", args.expression);
        eprintln!();
    }

    let circuit = match Circuit::compile_with(&args.expression, &options) {
        Ok(circuit) => circuit,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    log::info!("compiled '{}'", circuit.normalized);

    if args.summary {
        print_summary(&circuit);
    }

    let rendered = match args.output_format {
        OutputFormat::Text => render_text(&circuit, args.command).map_err(|e| e.to_string()),
        OutputFormat::Json => render_json(&circuit, args.command).map_err(|e| e.to_string()),
    };
    let rendered = match rendered {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("Error rendering output: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref output_path) = args.output_file {
        match fs::write(output_path, &rendered) {
            Ok(_) => {
                if args.summary {
                    eprintln!("Wrote output to: {}", output_path.display());
                }
            }
            Err(e) => {
                eprintln!("Error writing output file: {}", e);
                process::exit(1);
            }
        }
    } else {
        print!("{}", rendered);
    }

    if args.summary {
        eprintln!("Done.");
    }
}

fn print_summary(circuit: &Circuit) {
    eprintln!("Normalized:  {}", circuit.normalized);
    eprintln!("Tokens:      {}", circuit.tokens.len());
    eprintln!("Variables:   {}", join_chars(&circuit.variables));
    eprintln!("Gates:       {}", circuit.gate_count());
    eprintln!("Tree depth:  {}", circuit.ast.depth());
    eprintln!("Rows:        {} ({} true)", circuit.truth_table.len(), circuit.truth_table.ones());
    eprintln!(
        "Layout:      {} nodes, {} wires, {}x{}",
        circuit.layout.nodes.len(),
        circuit.layout.connections.len(),
        circuit.layout.bounds.width,
        circuit.layout.bounds.height
    );
    eprintln!("Steps:       {}", circuit.steps.len());
    eprintln!();
}

fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_json(circuit: &Circuit, command: Command) -> serde_json::Result<String> {
    let mut out = match command {
        Command::All => serde_json::to_string_pretty(circuit)?,
        Command::Check => serde_json::to_string_pretty(&serde_json::json!({
            "expression": circuit.expression,
            "normalized": circuit.normalized,
            "tokens": circuit.tokens,
            "variables": circuit.variables,
        }))?,
        Command::Table => serde_json::to_string_pretty(&circuit.truth_table)?,
        Command::Layout => serde_json::to_string_pretty(&circuit.layout)?,
        Command::Steps => serde_json::to_string_pretty(&circuit.steps)?,
        Command::Gates => serde_json::to_string_pretty(&circuit.gates)?,
    };
    out.push('\n');
    Ok(out)
}

fn render_text(circuit: &Circuit, command: Command) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let all = command == Command::All;

    if all || command == Command::Check {
        writeln!(out, "Expression: {}", circuit.normalized)?;
        writeln!(out, "Variables:  {}", join_chars(&circuit.variables))?;
    }
    if all || command == Command::Table {
        if all {
            writeln!(out)?;
        }
        write_table(&mut out, circuit)?;
    }
    if all || command == Command::Layout {
        if all {
            writeln!(out)?;
        }
        write_layout(&mut out, circuit)?;
    }
    if all || command == Command::Steps {
        if all {
            writeln!(out)?;
        }
        write_steps(&mut out, circuit)?;
    }
    if all || command == Command::Gates {
        if all {
            writeln!(out)?;
        }
        write_gates(&mut out, circuit)?;
    }
    Ok(out)
}

fn write_table(out: &mut String, circuit: &Circuit) -> std::fmt::Result {
    let mut table = Table::new();
    let mut header = Row::new(
        circuit
            .variables
            .iter()
            .map(|v| Cell::new(&v.to_string()))
            .collect(),
    );
    header.add_cell(Cell::new(&circuit.normalized));
    table.set_titles(header);

    let bit = |value: bool| {
        let mut cell = if value {
            Cell::new("1").style_spec("Fg")
        } else {
            Cell::new("0").style_spec("Fr")
        };
        cell.align(Alignment::CENTER);
        cell
    };

    for row in &circuit.truth_table.rows {
        let mut cells: Vec<Cell> = row.inputs.iter().map(|&v| bit(v)).collect();
        cells.push(bit(row.output));
        table.add_row(Row::new(cells));
    }
    write!(out, "{}", table)?;

    let table = &circuit.truth_table;
    if table.is_tautology() {
        writeln!(out, "This is a tautology!")?;
    } else if table.is_contradiction() {
        writeln!(out, "This is a contradiction!")?;
    } else {
        writeln!(out, "Minterms: {:?}", table.minterms())?;
    }
    Ok(())
}

fn write_layout(out: &mut String, circuit: &Circuit) -> std::fmt::Result {
    let layout = &circuit.layout;
    writeln!(
        out,
        "Layout ({} x {}):",
        layout.bounds.width, layout.bounds.height
    )?;
    for node in &layout.nodes {
        writeln!(
            out,
            "  {:<20} {:<6} at ({}, {}) size {}x{}",
            node.id.as_str(),
            node.label,
            node.x,
            node.y,
            node.width,
            node.height
        )?;
    }
    for wire in &layout.connections {
        let points: Vec<String> = wire
            .points
            .iter()
            .map(|p| format!("({}, {})", p.x, p.y))
            .collect();
        writeln!(out, "  {} : {}", wire.id, points.join(" -> "))?;
    }
    Ok(())
}

fn write_steps(out: &mut String, circuit: &Circuit) -> std::fmt::Result {
    for (i, step) in circuit.steps.iter().enumerate() {
        writeln!(out, "Step {}/{}: {}", i + 1, circuit.steps.len(), step.title)?;
        writeln!(out, "  {}", step.explanation)?;
        for substep in &step.substeps {
            writeln!(out, "  - {}", substep)?;
        }
    }
    Ok(())
}

fn write_gates(out: &mut String, circuit: &Circuit) -> std::fmt::Result {
    for gate in &circuit.gates {
        writeln!(out, "{}: {}", gate.name, gate.description)?;
        for application in gate.applications {
            writeln!(out, "  - {}", application)?;
        }
    }
    Ok(())
}
