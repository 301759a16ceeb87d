//! The console front end
//!
//! A line-oriented presentation layer over the registry: `add` shortens,
//! `open` resolves, `copy` prints the share string. A cleanup pass runs
//! before a command once the prune interval has passed since the last
//! one.

use std::io;
use std::io::BufRead;
use std::io::Write;
use std::time::Instant;

use crate::registry::Registry;

/// Run the interactive loop until end of input or `quit`
///
/// # Errors
///
/// Will return `Err` when reading or writing the console fails
pub fn run<I, O>(registry: &mut Registry, input: I, mut output: O) -> io::Result<()>
where
    I: BufRead,
    O: Write,
{
    let prune_interval = registry
        .config()
        .prune_interval
        .to_std()
        .unwrap_or_default();

    let mut last_prune = Instant::now();

    writeln!(
        output,
        "Briefly: links expire after {} minutes, `help` lists the commands",
        registry.config().expiry_window.num_minutes(),
    )?;

    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;

        if last_prune.elapsed() >= prune_interval {
            registry.prune_expired();
            last_prune = Instant::now();
        }

        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("add") => add(registry, &mut output, parts.next(), parts.next())?,
            Some("list") => list(registry, &mut output)?,
            Some("open") => open(registry, &mut output, parts.next())?,
            Some("copy") => copy(registry, &mut output, parts.next())?,
            Some("rm") => remove(registry, &mut output, parts.next())?,
            Some("stats") => stats(registry, &mut output)?,
            Some("export") => export(registry, &mut output)?,
            Some("help") => help(&mut output)?,
            Some("quit" | "exit") => break,
            Some(unknown) => writeln!(output, "Unknown command `{unknown}`, try `help`")?,
            None => {}
        }

        write!(output, "> ")?;
        output.flush()?;
    }

    Ok(())
}

/// `add <url> [name]`
fn add<O: Write>(
    registry: &mut Registry,
    output: &mut O,
    url: Option<&str>,
    name: Option<&str>,
) -> io::Result<()> {
    let Some(url) = url else {
        return writeln!(output, "Usage: add <url> [name]");
    };

    match registry.create(url, name) {
        Ok(link) => writeln!(
            output,
            "{} -> {}",
            registry.share_url(&link),
            link.destination,
        ),
        Err(error) => writeln!(output, "{error}"),
    }
}

/// `list`
fn list<O: Write>(registry: &Registry, output: &mut O) -> io::Result<()> {
    let links = registry.list_active();

    if links.is_empty() {
        return writeln!(output, "No links yet");
    }

    for link in links {
        let minutes_left = registry.time_remaining(&link).num_minutes();

        let marker = if registry.is_expiring_soon(&link) {
            ", expiring"
        } else {
            ""
        };

        writeln!(
            output,
            "[{}] {} -> {} ({} clicks, {minutes_left}m left{marker})",
            link.id,
            registry.share_url(&link),
            link.destination,
            link.clicks,
        )?;
    }

    Ok(())
}

/// `open <code>`
fn open<O: Write>(registry: &mut Registry, output: &mut O, code: Option<&str>) -> io::Result<()> {
    let Some(code) = code else {
        return writeln!(output, "Usage: open <code>");
    };

    match registry.resolve(code) {
        Ok(link) => writeln!(output, "Go to: {}", link.destination),
        Err(error) => writeln!(output, "{error}"),
    }
}

/// `copy <code>`
///
/// Printing the share string does not count as a click
fn copy<O: Write>(registry: &Registry, output: &mut O, code: Option<&str>) -> io::Result<()> {
    let Some(code) = code else {
        return writeln!(output, "Usage: copy <code>");
    };

    let link = registry
        .list_active()
        .into_iter()
        .find(|link| link.code == code);

    match link {
        Some(link) => writeln!(output, "{}", registry.share_url(&link)),
        None => writeln!(output, r#"No link found for code "{code}""#),
    }
}

/// `rm <id>`
fn remove<O: Write>(registry: &mut Registry, output: &mut O, id: Option<&str>) -> io::Result<()> {
    let Some(Ok(id)) = id.map(str::parse::<u64>) else {
        return writeln!(output, "Usage: rm <id>");
    };

    if registry.remove(id) {
        writeln!(output, "Deleted link {id}")
    } else {
        writeln!(output, "No link with id {id}")
    }
}

/// `stats`
fn stats<O: Write>(registry: &Registry, output: &mut O) -> io::Result<()> {
    let totals = registry.totals();

    writeln!(output, "{} links, {} clicks", totals.links, totals.clicks)
}

/// `export`
fn export<O: Write>(registry: &Registry, output: &mut O) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&registry.list_active()).map_err(io::Error::other)?;

    writeln!(output, "{json}")
}

/// `help`
fn help<O: Write>(output: &mut O) -> io::Result<()> {
    writeln!(
        output,
        "Commands:\n  \
         add <url> [name]  shorten a URL, optionally under a custom name\n  \
         list              show the active links\n  \
         open <code>       resolve a code and count the click\n  \
         copy <code>       print the share string for a code\n  \
         rm <id>           delete a link\n  \
         stats             totals over the active links\n  \
         export            dump the active links as JSON\n  \
         quit              leave",
    )
}
