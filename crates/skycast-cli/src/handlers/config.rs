//! Config command handler.
//!
//! Shows, updates and resets the stored settings.

use anyhow::Result;
use skycast_core::{Settings, SettingsUpdate};

use crate::bootstrap::CliContext;
use crate::config_commands::ConfigCommand;
use crate::presentation::format_optional;
use crate::utils::input::prompt_confirmation;

/// Execute the config command.
pub async fn execute(ctx: &CliContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let settings = ctx.app().settings().get().await?;
            println!("Current settings:");
            print_settings(&settings);
            Ok(())
        }
        ConfigCommand::Set {
            default_location,
            clear_default_location,
            future_periods,
            show_celsius,
            contact_email,
            clear_contact_email,
        } => {
            let update = SettingsUpdate {
                default_location: tristate(default_location, clear_default_location),
                future_periods: future_periods.map(Some),
                show_celsius: show_celsius.map(Some),
                contact_email: tristate(contact_email, clear_contact_email),
            };

            if update.is_empty() {
                println!("No settings provided. Use --help to see available options.");
                return Ok(());
            }

            let updated = ctx.app().settings().update(update).await?;
            println!("✓ Settings updated successfully:");
            print_settings(&updated);
            Ok(())
        }
        ConfigCommand::Reset { force } => {
            if !force {
                let confirm =
                    prompt_confirmation("Are you sure you want to reset all settings to defaults?")?;
                if !confirm {
                    println!("Reset cancelled.");
                    return Ok(());
                }
            }

            ctx.app().settings().reset().await?;
            println!("✓ All settings have been reset to defaults.");
            Ok(())
        }
    }
}

/// `--clear` wins over a value; neither leaves the field untouched.
fn tristate<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear { Some(None) } else { value.map(Some) }
}

fn print_settings(settings: &Settings) {
    println!(
        "  default_location: {}",
        format_optional(settings.default_location.as_ref(), "None")
    );
    println!(
        "  future_periods:   {}",
        settings.effective_future_periods()
    );
    println!(
        "  show_celsius:     {}",
        settings.effective_show_celsius()
    );
    println!(
        "  contact_email:    {}",
        format_optional(settings.contact_email.as_ref(), "None")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tristate() {
        assert_eq!(tristate(Some(3), false), Some(Some(3)));
        assert_eq!(tristate(Some(3), true), Some(None));
        assert_eq!(tristate::<u32>(None, true), Some(None));
        assert_eq!(tristate::<u32>(None, false), None);
    }
}
