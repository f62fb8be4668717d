//! Commands typed by the customer at the prompt.

use shared::domain::{ItemId, PaymentMethod};

pub const HELP: &str = "\
commands:
  table <number>     start ordering for a table
  filter <category>  show one category (`filter All` shows everything)
  add <item id>      add one of an item to the cart
  checkout           review the cart
  menu               back to the menu
  pay <counter|online>
                     choose how to pay
  submit             place the order
  help               show this help
  quit               exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    StartSession { table: String },
    SetFilter { category: String },
    AddToCart { item_id: ItemId },
    ShowCheckout,
    ShowMenu,
    SelectPayment { method: PaymentMethod },
    Submit,
    Help,
    Quit,
}

impl UiCommand {
    pub fn name(&self) -> &'static str {
        match self {
            UiCommand::StartSession { .. } => "start_session",
            UiCommand::SetFilter { .. } => "set_filter",
            UiCommand::AddToCart { .. } => "add_to_cart",
            UiCommand::ShowCheckout => "show_checkout",
            UiCommand::ShowMenu => "show_menu",
            UiCommand::SelectPayment { .. } => "select_payment",
            UiCommand::Submit => "submit",
            UiCommand::Help => "help",
            UiCommand::Quit => "quit",
        }
    }
}

/// Parses one input line. `Ok(None)` means the line was blank.
pub fn parse_command(line: &str) -> Result<Option<UiCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let cmd = match verb.to_ascii_lowercase().as_str() {
        // An empty table argument is passed through so the session can prompt.
        "table" => UiCommand::StartSession {
            table: rest.to_string(),
        },
        "filter" if !rest.is_empty() => UiCommand::SetFilter {
            category: rest.to_string(),
        },
        "add" if !rest.is_empty() => UiCommand::AddToCart {
            item_id: ItemId::from(rest),
        },
        "checkout" | "cart" => UiCommand::ShowCheckout,
        "menu" | "back" => UiCommand::ShowMenu,
        "pay" => UiCommand::SelectPayment {
            method: rest
                .parse::<PaymentMethod>()
                .map_err(|err| err.to_string())?,
        },
        "submit" | "order" => UiCommand::Submit,
        "help" | "?" => UiCommand::Help,
        "quit" | "exit" => UiCommand::Quit,
        "filter" | "add" => return Err(format!("`{verb}` needs an argument; type `help`")),
        _ => return Err(format!("unknown command `{verb}`; type `help`")),
    };
    Ok(Some(cmd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_command("add ma12").expect("parse"),
            Some(UiCommand::AddToCart {
                item_id: ItemId::from("ma12")
            })
        );
        assert_eq!(
            parse_command("  filter   Main Course ").expect("parse"),
            Some(UiCommand::SetFilter {
                category: "Main Course".to_string()
            })
        );
        assert_eq!(
            parse_command("PAY online").expect("parse"),
            Some(UiCommand::SelectPayment {
                method: PaymentMethod::Online
            })
        );
    }

    #[test]
    fn empty_table_argument_reaches_the_session() {
        assert_eq!(
            parse_command("table").expect("parse"),
            Some(UiCommand::StartSession {
                table: String::new()
            })
        );
    }

    #[test]
    fn rejects_unknown_and_incomplete_input() {
        assert_eq!(parse_command("   ").expect("blank"), None);
        assert!(parse_command("dance").is_err());
        assert!(parse_command("add").is_err());
        assert_eq!(
            parse_command("pay card").expect_err("method"),
            "unrecognized payment method 'card'"
        );
    }
}
