//! Application entry point and pipeline orchestration.
//! Parses the command line, then materializes the project: downloads the
//! template archive, extracts it, places it into the target directory,
//! rewrites the generated manifests and installs the dependencies.

use create_boardzilla_game::{
    archive::{copy_tree, single_top_level, unpack_archive},
    cli::{get_args, Args},
    error::{default_error_handler, Error, Result},
    fetch::download_archive,
    install::{Installer, NpmInstaller},
    manifest::rewrite_manifests,
    project::resolve_project_dir,
    staging::Staging,
    template,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Flow
/// 1. Resolves the template selector against the registry
/// 2. Resolves the target directory and checks for conflicts
/// 3. Stages, downloads and extracts the template archive
/// 4. Copies the template contents into the target directory
/// 5. Rewrites the project and game manifests
/// 6. Installs dependencies with npm
fn run(args: Args) -> Result<()> {
    println!();

    let template = template::resolve(&args.template)?;
    let current_dir = std::env::current_dir().map_err(Error::IoError)?;
    let project_dir = resolve_project_dir(&current_dir, &args.name)?;

    // Staging artifacts are removed when this value drops, on success and
    // on every error path; an interrupt removes them via a signal handler.
    let staging = Staging::new()?;

    println!("Using template '{}' ({}).", template.selector, template.repo);
    download_archive(&template.archive_url(), staging.archive_path())?;
    unpack_archive(staging.archive_path(), staging.extract_path())?;
    let template_root = single_top_level(staging.extract_path())?;
    copy_tree(&template_root, &project_dir)?;

    rewrite_manifests(&project_dir, &args.name)?;

    let status = NpmInstaller::new().install(&project_dir)?;
    if !status.success() {
        // npm's own output has already been streamed through; the
        // scaffolded directory stays in place.
        return Err(Error::InstallError { status });
    }

    println!("Success! Your new project is ready.");
    println!("Created {} at {}", args.name, project_dir.display());
    Ok(())
}
