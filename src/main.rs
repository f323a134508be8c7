//! # Panelform Main Entry Point
//!
//! Drives the admin panel form workflows from the command line.

use anyhow::{Context, Result};
use panelform::cmd_args::{AddContactArgs, Command, CommandLineArgs, ContactCommand, DirectoryCommand};
use panelform::config::{self, Profile};
use panelform::forms::contact_form;
use panelform::logging::{self, LogConfig};
use panelform::services::{ChainedCredential, EnvCredential, StaticCredential};
use panelform::views::{render_detail, render_form};
use panelform::{
    ConsoleNotifier, DetailController, DetailState, HistoryRouter, PanelClient,
    SubmissionController, SubmitOutcome,
};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cmd_args = CommandLineArgs::parse();
    logging::init_logging(&LogConfig::from_env(cmd_args.verbose()));

    let profile_path = config::get_profile_path();
    let profile = config::load_profile(cmd_args.profile(), &profile_path)?;
    let client = create_client(&profile)?;

    match cmd_args.command() {
        Command::Contact(ContactCommand::Add(args)) => add_contact(client, args).await,
        Command::Directory(DirectoryCommand::View { id }) => {
            view_directory(client, &profile, id.as_deref()).await
        }
    }
}

fn create_client(profile: &Profile) -> Result<PanelClient> {
    let mut providers: Vec<Box<dyn panelform::CredentialProvider>> =
        vec![Box::new(EnvCredential::default())];
    if let Some(token) = &profile.token {
        providers.push(Box::new(StaticCredential::new(token.clone())));
    }
    PanelClient::new(&profile.base_url, Arc::new(ChainedCredential::new(providers)))
        .with_context(|| format!("Failed to create API client for profile '{}'", profile.name))
}

async fn add_contact(client: PanelClient, args: &AddContactArgs) -> Result<ExitCode> {
    let router = Arc::new(HistoryRouter::new());
    let mut form = SubmissionController::new(
        Arc::new(contact_form()),
        client,
        ConsoleNotifier,
        Arc::clone(&router),
    );

    let typed = [
        ("contact_name", &args.name),
        ("contact_mobile", &args.mobile),
        ("contact_email", &args.email),
        ("contact_address", &args.address),
        ("contact_pincode", &args.pincode),
    ];
    for (field, text) in typed {
        let rejected = form.type_text(field, text)?;
        if rejected > 0 {
            tracing::warn!("Ignored {} keystroke(s) typed into {}", rejected, field);
        }
    }
    form.select_options("contact_group", &args.groups)?;
    form.set_field("contact_state", args.state.as_str())?;

    print!("{}", render_form(form.store(), form.is_submitting()));

    let exit_code = match form.submit().await {
        SubmitOutcome::Submitted => ExitCode::SUCCESS,
        SubmitOutcome::Rejected { .. } => {
            print!("{}", render_form(form.store(), form.is_submitting()));
            ExitCode::from(2)
        }
        SubmitOutcome::Failed { .. } | SubmitOutcome::Busy => ExitCode::FAILURE,
    };

    if let Some(route) = router.current() {
        println!("→ {route}");
    }
    Ok(exit_code)
}

async fn view_directory(
    client: PanelClient,
    profile: &Profile,
    id: Option<&str>,
) -> Result<ExitCode> {
    let mut view = DetailController::new(client, ConsoleNotifier);
    let state = view.load(id).await;
    print!("{}", render_detail(state, profile.image_base_url.as_deref()));

    Ok(match state {
        DetailState::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
