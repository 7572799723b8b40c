//! recruitdata CLI - recruitment test data for the end-to-end suite
//!
//! # Data Commands
//!
//! ```bash
//! recruitdata generate 5 --json testData_en.json      # Synthetic candidates to JSON
//! recruitdata pipeline 3 --via-csv                     # generate → CSV → JSON → read back
//! recruitdata convert recruitments.csv out.json        # CSV file to JSON rows
//! recruitdata validate out.json                        # Check candidates before a run
//! ```
//!
//! # Credential Commands
//!
//! ```bash
//! recruitdata encrypt-env --environment qa             # Seal config/.env.qa in place
//! recruitdata decrypt-env                              # Open config/.env in place
//! ```

use clap::{Args, Parser, Subcommand};
use recruitdata::config::parse_delimiter;
use recruitdata::parser::parse_table;
use recruitdata::{
    decrypt_env_file, encrypt_env_file, env_file_path, validate_candidates, CredentialCipher,
    CryptoConfig, FileSink, FlowReport, GeneratorConfig, PipelineDriver, RecordGenerator,
    TestDataConfig,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "recruitdata")]
#[command(about = "Generate and convert recruitment test data", long_about = None)]
struct Cli {
    #[command(flatten)]
    data: DataArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DataArgs {
    /// Test-data directory all file names resolve under
    #[arg(long, global = true, env = "TESTDATA_DIR", default_value = "testdata")]
    data_dir: PathBuf,

    /// CSV delimiter (one non-whitespace ASCII character)
    #[arg(long, global = true, env = "TESTDATA_DELIMITER", default_value = ",")]
    delimiter: String,

    /// Allowed vacancy designations, comma separated
    #[arg(long, global = true, env = "RECRUITMENT_DESIGNATIONS", value_delimiter = ',')]
    designations: Vec<String>,
}

impl DataArgs {
    fn test_data(&self) -> Result<TestDataConfig, Box<dyn std::error::Error>> {
        let delimiter = parse_delimiter(&self.delimiter)?;
        Ok(TestDataConfig::new(&self.data_dir).with_delimiter(delimiter)?)
    }

    fn generator(&self) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
        if self.designations.is_empty() {
            Ok(GeneratorConfig::default())
        } else {
            Ok(GeneratorConfig::new(self.designations.iter().cloned())?)
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate candidates and write them to JSON and/or CSV
    Generate {
        /// Number of candidates
        count: usize,

        /// JSON file name in the test-data directory
        #[arg(long)]
        json: Option<String>,

        /// CSV file name in the test-data directory
        #[arg(long)]
        csv: Option<String>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run a full flow and print the candidates read back
    Pipeline {
        /// Number of candidates
        count: usize,

        /// Go through a CSV file before writing JSON
        #[arg(long)]
        via_csv: bool,

        /// CSV file name (with --via-csv)
        #[arg(long, default_value = "testData_en.csv")]
        csv: String,

        /// JSON file name
        #[arg(long, default_value = "testDataFromCSV.json")]
        json: String,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Convert a CSV file in the test-data directory to JSON
    Convert {
        /// Input CSV file name
        csv: String,

        /// Output JSON file name
        json: String,

        /// Require candidate columns and write typed candidates
        #[arg(long)]
        candidates: bool,
    },

    /// Parse any CSV file and print JSON rows
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a JSON candidate file from the test-data directory
    Validate {
        /// JSON file name
        input: String,
    },

    /// Encrypt every value of an env file in place
    EncryptEnv(EnvArgs),

    /// Decrypt every value of an env file in place
    DecryptEnv(EnvArgs),
}

#[derive(Args)]
struct EnvArgs {
    /// Explicit env file (overrides --config-dir/--environment)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Directory holding .env files
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Environment suffix, selects .env.<environment>
    #[arg(long, env = "NODE_ENV")]
    environment: Option<String>,
}

impl EnvArgs {
    fn path(&self) -> PathBuf {
        match &self.env_file {
            Some(path) => path.clone(),
            None => env_file_path(&self.config_dir, self.environment.as_deref()),
        }
    }
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            count,
            json,
            csv,
            seed,
        } => cmd_generate(&cli.data, count, json.as_deref(), csv.as_deref(), seed),

        Commands::Pipeline {
            count,
            via_csv,
            csv,
            json,
            seed,
        } => cmd_pipeline(&cli.data, count, via_csv.then_some(csv.as_str()), &json, seed),

        Commands::Convert {
            csv,
            json,
            candidates,
        } => cmd_convert(&cli.data, &csv, &json, candidates),

        Commands::Parse { input, output } => cmd_parse(&cli.data, &input, output.as_deref()),

        Commands::Validate { input } => cmd_validate(&cli.data, &input),

        Commands::EncryptEnv(args) => cmd_encrypt_env(&args),

        Commands::DecryptEnv(args) => cmd_decrypt_env(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn make_generator(config: &GeneratorConfig, seed: Option<u64>) -> RecordGenerator {
    match seed {
        Some(seed) => RecordGenerator::with_seed(config, seed),
        None => RecordGenerator::new(config),
    }
}

fn cmd_generate(
    data: &DataArgs,
    count: usize,
    json: Option<&str>,
    csv: Option<&str>,
    seed: Option<u64>,
) -> CliResult {
    let generator_config = data.generator()?;
    let batch = make_generator(&generator_config, seed).generate(count);
    eprintln!("Generated {} candidate(s)", batch.len());

    if json.is_none() && csv.is_none() {
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }

    let sink = FileSink::new(data.test_data()?);
    if let Some(name) = json {
        let path = sink.write_json(&batch, name)?;
        eprintln!("   JSON written to: {}", path.display());
    }
    if let Some(name) = csv {
        let path = sink.write_csv(&batch, name)?;
        eprintln!("   CSV written to: {}", path.display());
    }

    Ok(())
}

fn cmd_pipeline(
    data: &DataArgs,
    count: usize,
    csv: Option<&str>,
    json: &str,
    seed: Option<u64>,
) -> CliResult {
    let generator_config = data.generator()?;
    let mut driver = PipelineDriver::new(data.test_data()?, &generator_config)
        .with_generator(make_generator(&generator_config, seed));

    let report = match csv {
        Some(csv) => driver.generate_via_csv_with_report(count, csv, json)?,
        None => driver.generate_to_json_with_report(count, json)?,
    };

    print_report(&report)
}

fn cmd_convert(data: &DataArgs, csv: &str, json: &str, candidates: bool) -> CliResult {
    let test_data = data.test_data()?;

    if candidates {
        let driver = PipelineDriver::new(test_data, &data.generator()?);
        let report = driver.convert_csv_with_report(csv, json)?;
        return print_report(&report);
    }

    let sink = FileSink::new(test_data);
    let rows = sink.convert_csv_to_json(csv, json)?;
    eprintln!("Converted {} row(s) to: {}", rows, sink.path_for(json)?.display());
    Ok(())
}

fn cmd_parse(data: &DataArgs, input: &Path, output: Option<&Path>) -> CliResult {
    eprintln!("Parsing CSV: {}", input.display());

    let delimiter = parse_delimiter(&data.delimiter)?;
    let content = fs::read_to_string(input)?;
    let table = parse_table(&content, delimiter)?;

    eprintln!("   Columns: {}", table.headers.join(", "));
    eprintln!("   Parsed {} row(s)", table.rows.len());

    let json = serde_json::to_string_pretty(&table.rows)?;
    write_output(&json, output)
}

fn cmd_validate(data: &DataArgs, input: &str) -> CliResult {
    let sink = FileSink::new(data.test_data()?);
    let candidates = sink.read_json(input)?;
    let report = validate_candidates(&candidates, &data.generator()?);

    for (i, err) in &report.errors {
        eprintln!("   Record {}: {}", i, err);
    }
    eprintln!("Results: {} valid, {} invalid", report.valid, report.invalid);

    if !report.all_valid() {
        return Err(format!("{} candidate(s) failed validation", report.invalid).into());
    }
    Ok(())
}

fn cmd_encrypt_env(args: &EnvArgs) -> CliResult {
    let path = args.path();
    let cipher = CredentialCipher::new(&CryptoConfig::from_env())?;
    let sealed = encrypt_env_file(&path, &cipher)?;
    eprintln!("Encrypted {} value(s) in {}", sealed, path.display());
    Ok(())
}

fn cmd_decrypt_env(args: &EnvArgs) -> CliResult {
    let path = args.path();
    let cipher = CredentialCipher::new(&CryptoConfig::from_env())?;
    let opened = decrypt_env_file(&path, &cipher)?;
    eprintln!("Decrypted {} value(s) in {}", opened, path.display());
    Ok(())
}

fn print_report(report: &FlowReport) -> CliResult {
    for path in &report.files {
        eprintln!("   Wrote: {}", path.display());
    }
    eprintln!("Read back {} candidate(s)", report.candidates.len());
    println!("{}", serde_json::to_string_pretty(&report.candidates)?);
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> CliResult {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
