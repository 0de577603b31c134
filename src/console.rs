use crate::core::intent::Intent;
use crate::core::session::ShopSession;
use crate::domain::ports::CartStore;
use crate::utils::error::{ErrorSeverity, Result};
use crate::utils::format::PriceFormat;
use crate::view;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const HELP: &str = "\
Commands:
  show                 list the catalog
  cart                 show the cart
  like <id>            toggle like
  add <id>             add one to the cart
  remove <id>          remove one from the cart
  select <id>          open the detail view
  clear                close the detail view
  comment <id>         open the comment editor
  draft <text>         set the comment text
  submit               post the comment
  close                close the comment editor
  quit";

/// Applies console commands from `input` until `quit` or end of input.
///
/// Lines that are not valid UTF-8 are decoded lossily. A read error ends the
/// loop like end of input, so the caller's shutdown path always runs. Only a
/// failed write to `out` is returned as an error.
pub async fn run<S, R, W>(
    session: &mut ShopSession<S>,
    mut input: R,
    out: &mut W,
    format: &PriceFormat,
) -> Result<()>
where
    S: CartStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Stopped reading commands: {}", e);
                break;
            }
        }

        let raw = String::from_utf8_lossy(&buf);
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line {
            "quit" | "exit" => break,
            "help" => writeln!(out, "{}", HELP)?,
            "show" => write!(out, "{}", view::catalog_listing(session, format))?,
            "cart" => write!(out, "{}", view::cart_summary(session, format))?,
            _ => apply(session, line, out, format)?,
        }
    }

    Ok(())
}

fn apply<S: CartStore, W: Write>(
    session: &mut ShopSession<S>,
    line: &str,
    out: &mut W,
    format: &PriceFormat,
) -> Result<()> {
    match line
        .parse::<Intent>()
        .and_then(|intent| session.dispatch(intent))
    {
        Ok(outcome) => writeln!(out, "{}", view::outcome_line(session, &outcome, format))?,
        Err(e) => {
            tracing::warn!(
                "Intent rejected: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            if e.severity() > ErrorSeverity::Low {
                tracing::warn!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            }
            writeln!(out, "❌ {}", e.user_friendly_message())?;
        }
    }
    Ok(())
}
