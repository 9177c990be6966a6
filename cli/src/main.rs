//! ontoschema CLI: command-line front-end for the ontology import engine
//!
//! `ontoschema import` converts an ontology document into a schema;
//! `ontoschema mappings` shows how vocabulary IRIs map to metamodel names.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use ontoschema::import::MappingTable;
use ontoschema::schema::writer;
use ontoschema::{
    ImportConfig, ImportEngine, MetamodelDescription, MetamodelMappings, OutputFormat, RdfFormat,
};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "ontoschema", version, about = "RDFS/OWL ontology to schema importer")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Extra metamodel mappings (YAML: name -> IRI or list of IRIs)
    #[arg(long, global = true, value_name = "FILE")]
    metamodel_mappings: Option<PathBuf>,

    /// Metamodel description to use instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    metamodel: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an ontology into a schema
    Import(ImportArgs),
    /// Show the mapping table, or how specific IRIs resolve
    Mappings {
        /// IRIs to resolve; all forward mappings are listed when omitted
        iris: Vec<String>,
    },
}

#[derive(Args)]
struct ImportArgs {
    /// Ontology document
    input: PathBuf,

    /// Input format (guessed from the file extension when omitted)
    #[arg(long)]
    format: Option<InputFormat>,

    /// Schema name
    #[arg(long)]
    name: Option<String>,

    /// Default prefix of the schema
    #[arg(long)]
    default_prefix: Option<String>,

    /// Namespace for the default prefix if the document does not declare it
    #[arg(long)]
    model_uri: Option<String>,

    /// Name of an identifier slot to add to every root class
    #[arg(long)]
    identifier: Option<String>,

    /// Base IRI for relative IRIs in the document
    #[arg(long)]
    base_iri: Option<String>,

    /// Write the schema here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Schema output format
    #[arg(long, default_value = "yaml")]
    output_format: SchemaFormat,

    /// Write the name -> IRI registry to this file
    #[arg(long, value_name = "FILE")]
    name_map: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum InputFormat {
    Turtle,
    Ntriples,
    Xml,
}

impl From<InputFormat> for RdfFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Turtle => RdfFormat::Turtle,
            InputFormat::Ntriples => RdfFormat::NTriples,
            InputFormat::Xml => RdfFormat::RdfXml,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum SchemaFormat {
    Yaml,
    Json,
}

impl From<SchemaFormat> for OutputFormat {
    fn from(format: SchemaFormat) -> Self {
        match format {
            SchemaFormat::Yaml => OutputFormat::Yaml,
            SchemaFormat::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = build_engine(cli.metamodel.as_deref(), cli.metamodel_mappings.as_deref())
        .and_then(|engine| match cli.command {
            Commands::Import(args) => run_import(engine, &args),
            Commands::Mappings { iris } => run_mappings(engine.mappings(), &iris),
        });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn build_engine(metamodel: Option<&Path>, mappings: Option<&Path>) -> anyhow::Result<ImportEngine> {
    let metamodel = match metamodel {
        Some(path) => MetamodelDescription::from_path(path)
            .with_context(|| format!("loading metamodel {}", path.display()))?,
        None => MetamodelDescription::builtin()?,
    };
    let overrides = match mappings {
        Some(path) => MetamodelMappings::from_path(path)
            .with_context(|| format!("loading mappings {}", path.display()))?,
        None => MetamodelMappings::new(),
    };
    Ok(ImportEngine::new(metamodel, &overrides))
}

fn run_import(mut engine: ImportEngine, args: &ImportArgs) -> anyhow::Result<()> {
    let format = args
        .format
        .map(RdfFormat::from)
        .or_else(|| RdfFormat::from_extension(&args.input))
        .unwrap_or_default();

    let mut config = ImportConfig::new().with_format(format);
    config.name = args.name.clone();
    config.default_prefix = args.default_prefix.clone();
    config.model_uri = args.model_uri.clone();
    config.identifier = args.identifier.clone();
    config.base_iri = args.base_iri.clone();

    let conversion = engine
        .convert_file(&args.input, &config)
        .with_context(|| format!("importing {}", args.input.display()))?;

    let output_format = OutputFormat::from(args.output_format);
    match &args.output {
        Some(path) => writer::write_file(&conversion.schema, path, output_format)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{}", writer::render(&conversion.schema, output_format)?),
    }

    if let Some(path) = &args.name_map {
        writer::write_file(engine.names(), path, output_format)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if !conversion.diagnostics.is_empty() {
        eprintln!(
            "{} classes, {} slots, {} diagnostics",
            conversion.schema.classes.len(),
            conversion.schema.fields.len(),
            conversion.diagnostics.len()
        );
    }

    Ok(())
}

fn run_mappings(mappings: &MappingTable, iris: &[String]) -> anyhow::Result<()> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if iris.is_empty() {
        table.set_header(vec!["Name", "IRIs"]);
        let mut rows = 0;
        for (name, targets) in mappings.iter_forward() {
            table.add_row(vec![name.to_string(), targets.join("\n")]);
            rows += 1;
        }
        println!("{}", table);
        println!("{} mapping(s)", rows);
        return Ok(());
    }

    table.set_header(vec!["IRI", "Name", "Candidates"]);
    for iri in iris {
        match mappings.resolve(iri) {
            Some(resolution) => table.add_row(vec![
                iri.clone(),
                resolution.name.to_string(),
                resolution.distinct_candidates().join(", "),
            ]),
            None => table.add_row(vec![iri.clone(), "(unmapped)".to_string(), String::new()]),
        };
    }
    println!("{}", table);

    Ok(())
}
