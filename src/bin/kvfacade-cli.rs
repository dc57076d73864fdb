use std::process::ExitCode;

use kvfacade::{Config, KvResult};
use tracing::debug;

/// A reply ready for printing.
enum Reply {
    Nil,
    Integer(i64),
    Text(String),
    Status(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = Config::from_env();
    let words = config.apply_args(&args);

    if words.is_empty() {
        eprintln!("usage: kvfacade-cli [--host H] [--port P] [--password PW] <command> [args...]");
        return ExitCode::FAILURE;
    }

    debug!("Using store at {}", config.addr());
    kvfacade::configure(config);

    match run(&words).await {
        Ok(Some(reply)) => {
            print_reply(&reply);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("(error) wrong arguments for '{}'", words[0]);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("(error) {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run one command. `Ok(None)` means the command or its arguments were not understood.
async fn run(words: &[String]) -> KvResult<Option<Reply>> {
    let cmd = words[0].to_lowercase();
    let args: Vec<&str> = words[1..].iter().map(String::as_str).collect();

    let reply = match (cmd.as_str(), args.as_slice()) {
        ("ping", []) => Reply::Status(kvfacade::ping().await?),
        ("set", [key, value]) => ok_reply(kvfacade::set(key, *value, None).await?),
        ("set", [key, value, ttl]) => match ttl.parse() {
            Ok(ttl) => ok_reply(kvfacade::set(key, *value, Some(ttl)).await?),
            Err(_) => return Ok(None),
        },
        ("get", [key]) => text_reply(kvfacade::get(key).await?),
        ("del", [key]) => Reply::Integer(kvfacade::delete(key).await? as i64),
        ("exists", [key]) => Reply::Integer(kvfacade::exists(key).await? as i64),
        ("expire", [key, ttl]) => match ttl.parse() {
            Ok(ttl) => Reply::Integer(kvfacade::expire(key, ttl).await? as i64),
            Err(_) => return Ok(None),
        },
        ("ttl", [key]) => Reply::Integer(kvfacade::ttl(key).await?),
        ("hset", [hash, field, value]) => Reply::Integer(kvfacade::hset(hash, field, *value).await?),
        ("hget", [hash, field]) => text_reply(kvfacade::hget(hash, field).await?),
        ("hdel", [hash, field]) => Reply::Integer(kvfacade::hdel(hash, field).await? as i64),
        _ => return Ok(None),
    };

    Ok(Some(reply))
}

fn ok_reply(ok: bool) -> Reply {
    if ok {
        Reply::Status("OK".to_string())
    } else {
        Reply::Nil
    }
}

fn text_reply(value: Option<String>) -> Reply {
    value.map_or(Reply::Nil, Reply::Text)
}

fn print_reply(reply: &Reply) {
    match reply {
        Reply::Nil => println!("(nil)"),
        Reply::Integer(n) => println!("(integer) {n}"),
        Reply::Text(s) => println!("{}", quoted(s)),
        Reply::Status(s) => println!("{s}"),
    }
}

/// Quote a reply the way redis-cli does: escape quotes, backslashes and
/// control bytes.
fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            c if c.is_control() && (c as u32) < 0x80 => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
