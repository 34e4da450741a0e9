use clap::Parser;

use share_guard::checker::{Checker, ProblemCode};
use share_guard::checks;
use share_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, FormatChoice};
use share_guard::config::Config;
use share_guard::ignore::{self, IgnoreMatcher};
use share_guard::output::{
    CheckProgress, ColorMode, JsonFormatter, ReportFormatter, ReportWriter, TextFormatter,
};
use share_guard::{EXIT_ERROR, EXIT_PROBLEMS_FOUND, EXIT_SUCCESS, ShareGuardError};

fn main() {
    let cli = Cli::parse();
    share_guard::logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Codes => run_codes(),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> share_guard::Result<i32> {
    let config = load_config(args, cli)?;
    let mut checker = Checker::new(load_ignore(args, &config)?);
    for check in checks::default_checks() {
        if !config.is_check_disabled(check.name()) {
            checker.register(check);
        }
    }

    let root = dunce::canonicalize(&args.path).map_err(|e| ShareGuardError::Stat {
        path: args.path.clone(),
        source: e,
    })?;
    let follow_symlinks = args.follow_symlinks || config.follow_symlinks;

    let total = checker.build_worklist(&root, follow_symlinks)?;
    log::info!("Located {total} files under {}", root.display());

    let progress = CheckProgress::new(total as u64, cli.quiet);
    let summary = checker.scan(|processed, _total| progress.update(processed));
    progress.finish();

    write_report(args, cli, &checker, &summary)?;

    Ok(if summary.problems_found == 0 {
        EXIT_SUCCESS
    } else {
        EXIT_PROBLEMS_FOUND
    })
}

fn load_config(args: &CheckArgs, cli: &Cli) -> share_guard::Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }
    match &args.config {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    }
}

fn load_ignore(args: &CheckArgs, config: &Config) -> share_guard::Result<IgnoreMatcher> {
    let path = args
        .ignore_file
        .clone()
        .or_else(|| config.ignore_file.clone())
        .or_else(ignore::default_ignore_path);
    match path {
        Some(path) => IgnoreMatcher::load(&path),
        None => Ok(IgnoreMatcher::empty()),
    }
}

fn write_report(
    args: &CheckArgs,
    cli: &Cli,
    checker: &Checker,
    summary: &share_guard::checker::ScanSummary,
) -> share_guard::Result<()> {
    let formatter: Box<dyn ReportFormatter> = match args.format {
        FormatChoice::Text => Box::new(TextFormatter::new(color_mode(cli.color))),
        FormatChoice::Json => Box::new(JsonFormatter),
    };
    let writer = ReportWriter::new(formatter);

    match &args.out {
        Some(path) => writer.write_to_path(path, checker.problems(), summary),
        None => writer.write(&mut std::io::stdout().lock(), checker.problems(), summary),
    }
}

const fn color_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn run_codes() -> i32 {
    for code in ProblemCode::ALL {
        println!("{:<24} {}", code.as_str(), code.description());
    }
    EXIT_SUCCESS
}
