use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spacing_client::api::{SpacingApi, SpacingApiError};
use spacing_client::config::ClientConfig;
use spacing_client::form::{FormState, SaveEvent, SpacingForm};
use spacing_client::guard::DirtyFlag;
use spacing_client::input::{InputChange, SpacingInput, UnitSelect};
use spacing_client::render::{render_record, render_units};
use spacing_client::storage::FileComponentStore;
use spacing_core::spacing::SpacingField;

const HELP: &str = "\
commands:
  show                          print the current record
  new                           create a new record and switch to it
  set <field> <value> [unit]    change a side, e.g. `set margin_top 12 px`
  unit <field> <unit>           change only the unit of a side
  units                         list the available units
  help                          this text
  quit                          save pending changes and exit

fields: margin_top margin_right margin_bottom margin_left
        padding_top padding_right padding_bottom padding_left";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spacing_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --- Configuration ---
    let config = ClientConfig::from_env();
    tracing::info!(
        api_url = %config.api_url,
        state_file = %config.state_file.display(),
        save_delay_secs = config.save_delay_secs,
        "Loaded editor configuration"
    );

    // --- Form ---
    let (form, mut events) = SpacingForm::new(
        Arc::new(SpacingApi::new(config.api_url.clone())),
        Arc::new(FileComponentStore::new(config.state_file.clone())),
        Arc::new(DirtyFlag::new()),
        config.save_delay(),
    );

    let alerts = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                SaveEvent::Saved { .. } => println!("saved"),
                SaveEvent::Failed { message } => println!("!! save failed: {message}"),
            }
        }
    });

    match form.mount().await {
        FormState::Ready(record) => println!("{}", render_record(&record)),
        FormState::NoProject { error } => {
            if let Some(message) = error {
                println!("!! {message}");
            }
            println!("No project yet. Type `new` to create one.");
        }
        FormState::Loading => {}
    }
    println!("Type `help` for commands.");

    // --- Command loop ---
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut quit_confirmed = false;

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read stdin");
                break;
            }
        };
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["quit" | "exit"] => {
                if form.has_unsaved_changes() && !quit_confirmed {
                    println!("Unsaved changes will be saved. Type `quit` again to confirm.");
                    quit_confirmed = true;
                    continue;
                }
                break;
            }
            ["help"] => println!("{HELP}"),
            ["units"] => println!("{}", render_units()),
            ["show"] => match form.record().await {
                Some(record) => println!("{}", render_record(&record)),
                None => println!("No project yet. Type `new` to create one."),
            },
            ["new"] => match form.create_project().await {
                Ok(record) => println!("{}", render_record(&record)),
                Err(e) => println!("!! could not create a project: {e}"),
            },
            ["set", field, value] => report(edit(&form, field, Some(*value), None).await),
            ["set", field, value, unit] => {
                report(edit(&form, field, Some(*value), Some(*unit)).await)
            }
            ["unit", field, unit] => report(edit(&form, field, None, Some(*unit)).await),
            _ => println!("Unknown command. Type `help` for commands."),
        }
        quit_confirmed = false;
    }

    if form.flush().await {
        tracing::info!("Pending changes flushed");
    }
    drop(form);
    let _ = alerts.await;
}

/// Build an [`InputChange`] from command words and hand it to the form.
async fn edit(
    form: &SpacingForm,
    field: &str,
    value: Option<&str>,
    unit: Option<&str>,
) -> Result<(), SpacingApiError> {
    let invalid = |e: spacing_core::error::CoreError| SpacingApiError::Validation(e.to_string());

    let field: SpacingField = field.parse().map_err(invalid)?;
    let record = form.record().await.ok_or(SpacingApiError::NotReady)?;

    let mut input = SpacingInput::new(field, record.property(field));
    input.focus();
    let mut change: InputChange = match value {
        Some(value) => input.set_value(value),
        None => InputChange::new(field, input.value(), input.unit()),
    };
    if let Some(label) = unit {
        let mut select = UnitSelect::new(input.unit());
        change = input.set_unit(select.choose(label).map_err(invalid)?);
    }
    input.blur();

    form.edit(change).await
}

fn report(result: Result<(), SpacingApiError>) {
    if let Err(e) = result {
        println!("!! {e}");
    }
}
