//! Parsing and encoding for the `DCC`/`SDCC_*` sub-grammar.

use std::net::{IpAddr, Ipv4Addr};

use crate::error::DccParseError;

use super::tokenize::tokenize;
use super::DccRequest;

/// Parse a CTCP body as a DCC negotiation.
pub fn parse(body: &str) -> Result<DccRequest, DccParseError> {
    let tokens = tokenize(body);
    let mut iter = tokens.iter();

    let head = iter
        .next()
        .ok_or_else(|| DccParseError::MalformedField("empty DCC body".to_string()))?;

    let secure = match head.as_str() {
        "DCC" => false,
        "SDCC" => true,
        other => return Err(DccParseError::UnknownSubcommand(other.to_string())),
    };

    let sub = iter
        .next()
        .ok_or_else(|| DccParseError::MalformedField("missing DCC subcommand".to_string()))?;
    let rest: Vec<&str> = iter.map(String::as_str).collect();

    let inner = match sub.to_ascii_uppercase().as_str() {
        "CHAT" => parse_chat(&rest)?,
        "SEND" => parse_send(&rest)?,
        "RESUME" => parse_resume(&rest)?,
        "ACCEPT" => parse_accept(&rest)?,
        other => return Err(DccParseError::UnknownSubcommand(other.to_string())),
    };

    Ok(if secure {
        DccRequest::Secure(Box::new(inner))
    } else {
        inner
    })
}

fn parse_chat(rest: &[&str]) -> Result<DccRequest, DccParseError> {
    if rest.len() != 3 {
        return Err(DccParseError::UnexpectedArity {
            subcommand: "CHAT",
            expected: "3 (protocol, address, port)",
            got: rest.len(),
        });
    }
    let address = parse_address(rest[1])?;
    let port = parse_port(rest[2])?;
    Ok(DccRequest::Chat { address, port })
}

fn parse_send(rest: &[&str]) -> Result<DccRequest, DccParseError> {
    if rest.len() < 3 || rest.len() > 5 {
        return Err(DccParseError::UnexpectedArity {
            subcommand: "SEND",
            expected: "3 to 5 (filename, address, port, [size], [token])",
            got: rest.len(),
        });
    }
    let filename = rest[0].to_string();
    let address = parse_address(rest[1])?;
    let port = parse_port(rest[2])?;
    let size = rest
        .get(3)
        .map(|s| {
            s.parse::<u64>()
                .map_err(|_| DccParseError::MalformedField(format!("invalid size {s}")))
        })
        .transpose()?;
    let token = rest.get(4).map(|s| s.to_string());
    Ok(DccRequest::Send {
        filename,
        address,
        port,
        size,
        token,
    })
}

fn parse_resume(rest: &[&str]) -> Result<DccRequest, DccParseError> {
    let (filename, port, position) = parse_resume_like("RESUME", rest)?;
    Ok(DccRequest::Resume {
        filename,
        port,
        position,
    })
}

fn parse_accept(rest: &[&str]) -> Result<DccRequest, DccParseError> {
    let (filename, port, position) = parse_resume_like("ACCEPT", rest)?;
    Ok(DccRequest::Accept {
        filename,
        port,
        position,
    })
}

fn parse_resume_like(
    subcommand: &'static str,
    rest: &[&str],
) -> Result<(String, u16, u64), DccParseError> {
    if rest.len() != 3 {
        return Err(DccParseError::UnexpectedArity {
            subcommand,
            expected: "3 (filename, port, position)",
            got: rest.len(),
        });
    }
    let filename = rest[0].to_string();
    let port = parse_port(rest[1])?;
    let position = rest[2]
        .parse::<u64>()
        .map_err(|_| DccParseError::MalformedField(format!("invalid position {}", rest[2])))?;
    Ok((filename, port, position))
}

fn parse_port(tok: &str) -> Result<u16, DccParseError> {
    tok.parse()
        .map_err(|_| DccParseError::MalformedField(format!("invalid port {tok}")))
}

/// Parse a DCC address token: a packed unsigned 32-bit decimal (the
/// historical IPv4 convention) or, failing that, a literal IP address.
fn parse_address(tok: &str) -> Result<IpAddr, DccParseError> {
    if let Ok(packed) = tok.parse::<u32>() {
        return Ok(IpAddr::V4(Ipv4Addr::from(packed)));
    }
    tok.parse::<IpAddr>()
        .map_err(|_| DccParseError::MalformedField(format!("invalid address {tok}")))
}

fn encode_address(addr: &IpAddr) -> String {
    match addr {
        IpAddr::V4(v4) => u32::from(*v4).to_string(),
        IpAddr::V6(v6) => v6.to_string(),
    }
}

fn quote_filename(name: &str) -> String {
    if name.contains(' ') || name.contains('"') {
        let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{escaped}\"")
    } else {
        name.to_string()
    }
}

/// Render a [`DccRequest`] back to its CTCP body form.
pub fn encode(req: &DccRequest) -> String {
    match req {
        DccRequest::Secure(inner) => format!("SDCC {}", encode_inner(inner)),
        other => format!("DCC {}", encode_inner(other)),
    }
}

fn encode_inner(req: &DccRequest) -> String {
    match req {
        DccRequest::Chat { address, port } => {
            format!("CHAT chat {} {}", encode_address(address), port)
        }
        DccRequest::Send {
            filename,
            address,
            port,
            size,
            token,
        } => {
            let mut out = format!(
                "SEND {} {} {}",
                quote_filename(filename),
                encode_address(address),
                port
            );
            if let Some(size) = size {
                out.push(' ');
                out.push_str(&size.to_string());
            }
            if let Some(token) = token {
                out.push(' ');
                out.push_str(token);
            }
            out
        }
        DccRequest::Resume {
            filename,
            port,
            position,
        } => format!("RESUME {} {} {}", quote_filename(filename), port, position),
        DccRequest::Accept {
            filename,
            port,
            position,
        } => format!("ACCEPT {} {} {}", quote_filename(filename), port, position),
        DccRequest::Secure(inner) => encode_inner(inner),
    }
}
