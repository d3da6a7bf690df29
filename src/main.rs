use std::fs::File;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::{error, info};
use simplelog::{LevelFilter, WriteLogger};

use chatty::export;
use chatty::message::{ChatMessage, Sender};
use chatty::notification::{Notification, NotificationLevel, NotificationManager};
use chatty::preferences::Settings;
use chatty::webhook::WebhookClient;

const SETTINGS_FILE: &str = "chatty-settings.json";

fn main() -> Result<()> {
    WriteLogger::init(
        LevelFilter::Info,
        simplelog::Config::default(),
        File::create("chatty.log")?,
    )?;
    info!("Starting Chatty");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if matches!(args.first().map(String::as_str), Some("settings")) {
        return run_settings_editor();
    }

    let mut settings = Settings::load_or_ephemeral(Some(SETTINGS_FILE));
    settings.apply_env_overrides();
    if !settings.is_configured() {
        println!("Please configure your settings first: chatty settings");
        println!("(or set CHATTY_WEBHOOK_URL, CHATTY_USERNAME, and CHATTY_PASSWORD)");
        return Ok(());
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let client = WebhookClient::new(
        settings.webhook_url.clone(),
        settings.username.clone(),
        settings.password.clone(),
    )?;

    let result = run_chat_loop(&runtime, client);
    info!("Shutting down Chatty");
    result
}

fn run_settings_editor() -> Result<()> {
    let mut settings = Settings::load_or_ephemeral(Some(SETTINGS_FILE));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut prompt = |label: &str, current: &str| -> Result<String> {
        if current.is_empty() {
            print!("{label}: ");
        } else {
            print!("{label} [{current}]: ");
        }
        io::stdout().flush()?;
        let entered = lines.next().transpose()?.unwrap_or_default();
        let entered = entered.trim();
        Ok(if entered.is_empty() {
            current.to_string()
        } else {
            entered.to_string()
        })
    };

    settings.webhook_url = prompt("N8N Webhook URL", &settings.webhook_url)?;
    settings.username = prompt("Username", &settings.username)?;
    settings.password = prompt("Password", &settings.password)?;

    if !settings.is_configured() {
        println!("All three settings are required; nothing was saved.");
        return Ok(());
    }

    settings.save()?;
    println!("Settings saved successfully!");
    Ok(())
}

struct ChatApp {
    messages: Vec<ChatMessage>,
    notifications: NotificationManager,
}

impl ChatApp {
    fn new() -> Self {
        ChatApp {
            messages: Vec::new(),
            notifications: NotificationManager::new(),
        }
    }

    fn last_reply(&self) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.sender == Sender::Assistant)
    }

    fn notify(&mut self, notification: Notification) {
        println!("[{}] {}", notification.level.label(), notification.message);
        self.notifications.show(notification);
    }
}

fn run_chat_loop(runtime: &tokio::runtime::Runtime, mut client: WebhookClient) -> Result<()> {
    let mut app = ChatApp::new();

    println!("Chatty - type a message, or /help for commands.");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        app.notifications.update();
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "/quit" | "/exit" => break,
            "/help" => print_help(),
            "/clear" => {
                app.messages.clear();
                client.reset_session();
                app.notify(Notification::info("Chat history cleared"));
            }
            "/copy" => run_export(&mut app, "Copied message to clipboard", |message| {
                export::copy_to_clipboard(message)
            }),
            "/export" => {
                let dir = std::env::current_dir()?;
                run_export(&mut app, "Exported chat-message.pdf", |message| {
                    export::export_to_pdf(message, &dir).map(|_| ())
                });
            }
            "/print" => run_export(&mut app, "Opened print view in your browser", |message| {
                export::open_print_view(message)
            }),
            _ => send_message(runtime, &client, &mut app, line),
        }
    }

    Ok(())
}

fn run_export<F>(app: &mut ChatApp, success: &str, action: F)
where
    F: FnOnce(&ChatMessage) -> Result<(), chatty::ExportError>,
{
    let Some(message) = app.last_reply().cloned() else {
        app.notify(Notification::warning("No reply to export yet"));
        return;
    };

    match action(&message) {
        Ok(()) => app.notify(Notification::info(success)),
        Err(e) => {
            error!("Export failed: {e}");
            app.notify(Notification::error(format!("Export failed: {e}")));
        }
    }
}

fn send_message(
    runtime: &tokio::runtime::Runtime,
    client: &WebhookClient,
    app: &mut ChatApp,
    text: &str,
) {
    app.messages.push(ChatMessage::user(text));
    println!("Chatty is typing...");

    match runtime.block_on(client.send_message(text)) {
        Ok(content) => {
            let reply = ChatMessage::assistant(content);
            println!(
                "{} [{}]: {}",
                reply.sender.display_name(),
                reply.formatted_time(),
                reply.content.text()
            );
            app.messages.push(reply);
        }
        Err(e) => {
            error!("Chat request failed: {e}");
            app.notify(Notification::timed(
                format!("Failed to get a response: {e}"),
                NotificationLevel::Error,
                std::time::Duration::from_secs(8),
            ));
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /copy    copy the last reply to the clipboard");
    println!("  /export  save the last reply as chat-message.pdf");
    println!("  /print   open the last reply as a printable page");
    println!("  /clear   clear history and start a new session");
    println!("  /quit    exit");
}
