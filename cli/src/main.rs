//! Plume CLI binary: generate report-card appreciations from the command line.
//!
//! Default mode builds one evaluation from flags; `batch` reads a JSON array
//! of evaluation records. Generations run one at a time; each success is
//! appended to the session log, shown on stdout, and exportable as CSV with
//! `--csv`. `--dry-run` prints the assembled prompt without any network call.

mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;

use plume::{
    build_prompt, validate, ChatCompletion, CommentLength, Evaluation, GenerateError,
    GenerationClient, Gender, PerformanceLevel, Section, SessionLog, SessionRecord, Tone,
    CSV_FILE_NAME, DEFAULT_MODEL,
};

#[derive(Parser, Debug)]
#[command(name = "plume")]
#[command(about = "Plume — générateur d'appréciations scolaires")]
struct Args {
    #[command(subcommand)]
    cmd: Option<Command>,

    /// Student first name
    #[arg(short = 'n', long, value_name = "PRENOM")]
    name: Option<String>,

    /// Subject taught (e.g. Mathématiques)
    #[arg(short, long, value_name = "MATIERE")]
    subject: Option<String>,

    /// Student gender: garcon | fille
    #[arg(short, long, default_value = "garcon")]
    gender: Gender,

    /// Overall level: excellent | bon | satisfaisant | fragile
    #[arg(short = 'l', long, default_value = "bon")]
    level: PerformanceLevel,

    /// Tone of the appreciation: encourageant | formel | direct
    #[arg(short, long, default_value = "encourageant")]
    tone: Tone,

    /// Target length: court | moyen | long
    #[arg(long, default_value = "moyen")]
    length: CommentLength,

    /// Section to include (repeatable): comportement | travail | niveau |
    /// conseils. Default: all four.
    #[arg(long = "section", value_name = "VOLET")]
    sections: Vec<Section>,

    /// Classroom behavior details
    #[arg(long, value_name = "TEXTE")]
    comportement: Option<String>,

    /// Effort and work-method details
    #[arg(long, value_name = "TEXTE")]
    travail: Option<String>,

    /// Strengths / acquired skills details
    #[arg(long, value_name = "TEXTE")]
    strengths: Option<String>,

    /// Areas for improvement / advice details
    #[arg(long, value_name = "TEXTE")]
    conseils: Option<String>,

    /// Model identifier (default: PLUME_MODEL env, else gpt-4o-mini)
    #[arg(short, long, value_name = "MODEL")]
    model: Option<String>,

    /// API key (default: OPENAI_API_KEY from env, .env, or XDG config)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Sampling temperature (0–2)
    #[arg(long, value_name = "T")]
    temperature: Option<f32>,

    /// Print the assembled prompt instead of calling the generation service
    #[arg(long)]
    dry_run: bool,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Write the session CSV to PATH after generation (use --csv=PATH;
    /// bare --csv writes appreciations.csv)
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = CSV_FILE_NAME
    )]
    csv: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one appreciation per record in a JSON file
    Batch {
        /// JSON file containing an array of evaluation records
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
    },
}

fn resolve_model(args: &Args) -> String {
    args.model
        .clone()
        .or_else(|| std::env::var("PLUME_MODEL").ok())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

/// Builds one evaluation from the top-level flags. Missing required fields
/// stay empty so the validator reports them with its own messages.
fn evaluation_from_flags(args: &Args) -> Evaluation {
    let sections = if args.sections.is_empty() {
        Section::CANONICAL.to_vec()
    } else {
        let mut seen: Vec<Section> = Vec::new();
        for s in &args.sections {
            if !seen.contains(s) {
                seen.push(*s);
            }
        }
        seen
    };
    Evaluation {
        student_name: args.name.clone().unwrap_or_default(),
        subject: args.subject.clone().unwrap_or_default(),
        gender: args.gender,
        performance_level: args.level,
        comportement: args.comportement.clone().unwrap_or_default(),
        travail: args.travail.clone().unwrap_or_default(),
        strengths: args.strengths.clone().unwrap_or_default(),
        areas_for_improvement: args.conseils.clone().unwrap_or_default(),
        tone: args.tone,
        sections,
        length: args.length,
    }
}

fn read_batch_file(path: &Path) -> Result<Vec<Evaluation>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("lecture de {} : {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("JSON invalide dans {} : {}", path.display(), e))
}

/// User-facing message per failure class; the underlying report goes to the
/// log only.
fn user_message(err: &GenerateError) -> &'static str {
    match err {
        GenerateError::InvalidCredential(_) => {
            "Clé API invalide ou refusée. Vérifiez OPENAI_API_KEY ou --api-key."
        }
        GenerateError::Transient(_) | GenerateError::EmptyResponse => {
            "Une erreur est survenue lors de la génération de l'appréciation. Veuillez réessayer."
        }
    }
}

fn print_dry_run(args: &Args, evals: &[Evaluation]) {
    if args.json {
        let prompts: Vec<serde_json::Value> = evals
            .iter()
            .map(|e| {
                serde_json::json!({
                    "student_name": e.student_name,
                    "prompt": build_prompt(e),
                })
            })
            .collect();
        let out = if args.cmd.is_some() {
            serde_json::json!({ "prompts": prompts })
        } else {
            prompts
                .into_iter()
                .next()
                .unwrap_or_else(|| serde_json::json!({}))
        };
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        let mut first = true;
        for eval in evals {
            if !first {
                println!();
            }
            first = false;
            println!("{}", build_prompt(eval));
        }
    }
}

async fn run(args: Args) -> ExitCode {
    let evaluations: Vec<Evaluation> = match &args.cmd {
        Some(Command::Batch { file }) => match read_batch_file(file) {
            Ok(evals) => evals,
            Err(msg) => {
                eprintln!("{}", msg);
                return ExitCode::from(2);
            }
        },
        None => vec![evaluation_from_flags(&args)],
    };
    let batch = args.cmd.is_some();

    // Validation runs first and in full; nothing invalid ever reaches the
    // generation service.
    let mut valid: Vec<Evaluation> = Vec::new();
    let mut had_invalid = false;
    for eval in evaluations {
        let errors = validate(&eval);
        if errors.is_empty() {
            valid.push(eval);
            continue;
        }
        had_invalid = true;
        let who = if eval.student_name.trim().is_empty() {
            "(sans prénom)".to_string()
        } else {
            eval.student_name.clone()
        };
        for (field, message) in errors.iter() {
            eprintln!("erreur de saisie [{}] {} : {}", who, field, message);
        }
    }
    if !batch && had_invalid {
        return ExitCode::from(2);
    }

    if args.dry_run {
        print_dry_run(&args, &valid);
        return if had_invalid {
            ExitCode::from(1)
        } else {
            ExitCode::SUCCESS
        };
    }

    let model = resolve_model(&args);
    let mut client = ChatCompletion::from_env(model, args.api_key.clone());
    if let Some(t) = args.temperature {
        client = client.with_temperature(t);
    }

    // One generation in flight at a time; the await gates the next submission.
    let mut log = SessionLog::new();
    let mut had_failure = had_invalid;
    let total = valid.len();
    for (i, eval) in valid.iter().enumerate() {
        let prompt = build_prompt(eval);
        debug!(student = %eval.student_name, prompt_len = prompt.len(), "submitting generation");
        match client.generate(&prompt).await {
            Ok(text) => {
                if batch {
                    eprintln!("[{}/{}] {} — ok", i + 1, total, eval.student_name);
                }
                log.append(SessionRecord::new(
                    eval.student_name.clone(),
                    eval.subject.clone(),
                    text,
                ));
            }
            Err(err) => {
                had_failure = true;
                debug!(error = %err, "generation failed");
                if batch {
                    eprintln!("[{}/{}] {} — échec", i + 1, total, eval.student_name);
                }
                eprintln!("{}", user_message(&err));
            }
        }
    }

    if args.json {
        let out = serde_json::json!({ "records": log.records() });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        let mut first = true;
        for record in log.records() {
            if !first {
                println!();
            }
            first = false;
            if batch {
                println!("— {} ({})", record.student_name, record.subject);
            }
            println!("{}", record.text);
        }
    }

    if let Some(path) = &args.csv {
        if log.is_empty() {
            eprintln!("aucune appréciation générée, CSV non écrit");
        } else if let Err(e) = std::fs::write(path, log.to_csv()) {
            eprintln!("écriture CSV {} : {}", path.display(), e);
            return ExitCode::from(1);
        } else {
            eprintln!("CSV écrit : {} ({} appréciations)", path.display(), log.len());
        }
    }

    if had_failure {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = config::load_and_apply(None) {
        eprintln!("config : {}", e);
    }
    if let Err(e) = logging::init() {
        eprintln!("logging : {}", e);
    }
    let args = Args::parse();
    run(args).await
}
