use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use portfolio_terminal::completer::{CommandCompleter, bind_history_keys};
use portfolio_terminal::github::{self, HttpFetcher};
use portfolio_terminal::output::OutputStreams;
use portfolio_terminal::preview::{PreviewSources, PreviewTab};
use portfolio_terminal::terminal::Terminal;
use portfolio_terminal::theme::{PreferenceStore, Theme, ThemeCell};
use portfolio_terminal::{ThemePersister, startup_theme, submit_and_render};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "portfolio-terminal")]
#[command(about = "Portfolio command terminal with theme, project and preview tools")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive terminal
    Shell,
    /// Submit each line to the terminal and print the log
    Run {
        #[arg(required = true)]
        lines: Vec<String>,
    },
    /// Show or change the saved theme
    Theme {
        #[arg(value_enum, default_value = "show")]
        action: ThemeAction,
    },
    /// List repositories, most starred first
    Projects {
        #[arg(short, long, env = "PORTFOLIO_GITHUB_USER", default_value = github::DEFAULT_USER)]
        user: String,

        /// Only show projects whose name or description contains this
        #[arg(short, long)]
        search: Option<String>,

        /// Show every project instead of the first few
        #[arg(short, long)]
        all: bool,
    },
    /// Show follower, repository, language and contribution counts
    Stats {
        #[arg(short, long, env = "PORTFOLIO_GITHUB_USER", default_value = github::DEFAULT_USER)]
        user: String,
    },
    /// Build the live-preview document from html/css/js sources
    Preview {
        #[arg(long)]
        html: Option<PathBuf>,
        #[arg(long)]
        css: Option<PathBuf>,
        #[arg(long)]
        js: Option<PathBuf>,

        /// Print the starter template for a tab and exit
        #[arg(long)]
        template: Option<PreviewTab>,

        /// Write the document here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeAction {
    Show,
    Toggle,
    Dark,
    Light,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "portfolio_terminal=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell(),
        Commands::Run { lines } => run(&lines),
        Commands::Theme { action } => theme(action),
        Commands::Projects { user, search, all } => projects(&user, search.as_deref(), all),
        Commands::Stats { user } => stats(&user),
        Commands::Preview {
            html,
            css,
            js,
            template,
            out,
        } => {
            let files = [
                (PreviewTab::Html, html),
                (PreviewTab::Css, css),
                (PreviewTab::Js, js),
            ];
            preview(files, template, out.as_deref())
        }
    }
}

fn preference_store() -> Option<PreferenceStore> {
    PreferenceStore::open_default()
        .inspect_err(|e| tracing::warn!("theme will not persist: {e}"))
        .ok()
}

fn shell() -> Result<()> {
    let store = preference_store();
    let initial = startup_theme(store.as_ref());
    let theme = ThemeCell::new(initial);
    let mut persister = ThemePersister::new(store, initial);

    let terminal = Arc::new(Mutex::new(Terminal::new(theme.clone())));
    let mut streams = OutputStreams::default().with_echo(false);
    {
        let mut term = terminal.lock().unwrap_or_else(PoisonError::into_inner);
        term.welcome();
        streams.render(term.scrollback().entries());
    }

    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::new().context("failed to start line editor")?;
    rl.set_helper(Some(CommandCompleter::new()));
    bind_history_keys(&mut rl, &terminal);

    loop {
        match rl.readline("$ ") {
            Ok(line) => {
                let cleared = {
                    let mut term = terminal.lock().unwrap_or_else(PoisonError::into_inner);
                    submit_and_render(&mut term, &line, &mut streams);
                    term.scrollback().is_empty() && !line.trim().is_empty()
                };
                if cleared {
                    rl.clear_screen()?;
                }
                persister.sync(theme.get());
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("reading input"),
        }
    }

    Ok(())
}

fn run(lines: &[String]) -> Result<()> {
    let store = preference_store();
    let initial = startup_theme(store.as_ref());
    let theme = ThemeCell::new(initial);
    let mut persister = ThemePersister::new(store, initial);

    let mut terminal = Terminal::new(theme.clone());
    let mut streams = OutputStreams::default();
    for line in lines {
        submit_and_render(&mut terminal, line, &mut streams);
        persister.sync(theme.get());
    }
    Ok(())
}

fn theme(action: ThemeAction) -> Result<()> {
    let store = PreferenceStore::open_default()?;
    let current = startup_theme(Some(&store));
    let next = match action {
        ThemeAction::Show => {
            println!("{current}");
            return Ok(());
        }
        ThemeAction::Toggle => current.toggled(),
        ThemeAction::Dark => Theme::Dark,
        ThemeAction::Light => Theme::Light,
    };
    store
        .save_theme(next)
        .with_context(|| format!("saving theme to {}", store.path().display()))?;
    println!("{next}");
    Ok(())
}

fn projects(user: &str, search: Option<&str>, all: bool) -> Result<()> {
    let fetcher = HttpFetcher::new(github::API_BASE)?;
    let result = github::fetch_projects(&fetcher, user)
        .inspect_err(|e| tracing::warn!("fetching projects for {user}: {e}"))
        .map(|projects| match search {
            Some(term) => github::filter_projects(&projects, term)
                .into_iter()
                .cloned()
                .collect(),
            None => projects,
        });
    for line in github::render_projects(&result, all) {
        println!("{line}");
    }
    Ok(())
}

fn stats(user: &str) -> Result<()> {
    let fetcher = HttpFetcher::new(github::API_BASE)?;
    for line in github::fetch_stats(&fetcher, user).lines() {
        println!("{line}");
    }
    Ok(())
}

fn preview(
    files: [(PreviewTab, Option<PathBuf>); 3],
    template: Option<PreviewTab>,
    out: Option<&Path>,
) -> Result<()> {
    if let Some(tab) = template {
        println!("{}", tab.template());
        return Ok(());
    }

    let mut sources = PreviewSources::default();
    for (tab, path) in files {
        if let Some(path) = path {
            let source = fs::read_to_string(&path)
                .with_context(|| format!("{}: cannot read {tab} source", path.display()))?;
            sources.set(tab, source);
        }
    }

    let doc = sources.compose();
    match out {
        Some(path) => fs::write(path, doc)
            .with_context(|| format!("{}: cannot write preview", path.display()))?,
        None => print!("{doc}"),
    }
    Ok(())
}
