mod build;
mod cli;
mod config;
mod init;
mod logging;
mod render;

pub fn run(args: Vec<String>) -> anyhow::Result<()> {
    let cmd = cli::parse_args(&args)?;
    match cmd {
        cli::Command::Help(topic) => {
            cli::print_help(topic);
            Ok(())
        }
        cli::Command::Init(args) => init::run(args),
        cli::Command::Build(args) => {
            let project = config::ProjectConfig::load(args.config.as_deref())?;
            logging::init(project.log_filter());
            if let Some(path) = &project.config_path {
                tracing::debug!(config = %path.display(), "loaded config");
            }
            build::run(args, &project)
        }
    }
}
