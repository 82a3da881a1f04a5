//! Terminal front end for topic administration.

mod command;

use qz_client::{ClientConfig, HttpTopicClient, TopicService};
use qz_ui::{
    Notifier, Toast, Tone,
    admin::{AdminController, ConfirmDialog, Field},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::command::{Command, HELP};

/// Prints toasts where the user is looking
#[derive(Debug, Clone, Copy)]
struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, toast: Toast) {
        let marker = match toast.tone {
            Tone::Success => "ok",
            Tone::Failure => "!!",
        };
        println!("[{marker}] {}: {}", toast.title, toast.description);
    }
}

type Controller = AdminController<HttpTopicClient, StdoutNotifier>;

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,qz_ui=info"));

    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();
}

fn print_form<S: TopicService, N: Notifier>(controller: &AdminController<S, N>) {
    let workflow = controller.workflow();
    let mode = workflow.edit_mode();

    println!("== {} ==", mode.heading());
    for field in Field::ALL {
        println!("  {:<12} {}", format!("{}:", field.label()), workflow.form().value(field));
    }
    println!("  [{}]", mode.submit_label());
}

fn print_dialog(dialog: &ConfirmDialog) {
    println!("-- {} --", dialog.title);
    println!("{}", dialog.description);
    println!(
        "[{}] / [{}]",
        ConfirmDialog::CONFIRM_LABEL,
        ConfirmDialog::CANCEL_LABEL
    );
}

fn render(controller: &Controller, with_list: bool) {
    print_form(controller);
    if with_list {
        print!("{}", controller.workflow().list_view());
    }
    if let Some(dialog) = controller.workflow().dialog() {
        print_dialog(&dialog);
    }
}

/// Apply one command. Returns false once the user asks to quit.
async fn dispatch(controller: &mut Controller, command: Command) -> bool {
    let accepted = match command {
        Command::List => {
            print!("{}", controller.workflow().list_view());
            return true;
        }
        Command::Show => {
            render(controller, false);
            return true;
        }
        Command::Help => {
            println!("{HELP}");
            return true;
        }
        Command::Quit => return false,
        Command::Set(field, value) => controller.edit_field(field, value),
        Command::Edit(id) => {
            if controller.workflow().topic(id).is_none() {
                println!("No listed topic with id {id}");
                return true;
            }
            controller.edit_topic(id)
        }
        Command::Delete(id) => controller.request_delete(id),
        Command::Submit => {
            controller.submit().await;
            true
        }
        Command::Answer(answer) => {
            if controller.workflow().pending_confirmation().is_none() {
                println!("Nothing to confirm");
                return true;
            }
            controller.answer(answer).await;
            true
        }
        Command::Reload => {
            controller.reload().await;
            true
        }
    };

    if !accepted {
        println!("Answer the open confirmation first (yes/no)");
    }
    render(controller, true);
    true
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ClientConfig::from_env()?;
    let client = HttpTopicClient::new(&config)?;
    tracing::info!(api_url = %config.api_url, "Managing topics");

    let mut controller = AdminController::new(client, StdoutNotifier);
    controller.mount().await;
    render(&controller, true);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if !dispatch(&mut controller, command).await {
                    break;
                }
            }
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}
