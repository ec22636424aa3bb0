//! Display labels in the supported languages.
//!
//! Spanish is the reference set; a label missing from another language falls
//! back to the Spanish text.

use crate::config::Lang;
use crate::error::{AddressFault, ParseError};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Label {
    Address,
    Mask,
    Network,
    Broadcast,
    FirstHost,
    LastHost,
    UsableHosts,
    TotalAddresses,
    Private,
    Public,
    Class,
    Loopback,
    Binary,
    Error,
}

fn spanish(label: Label) -> &'static str {
    match label {
        Label::Address => "DIRECCIÓN IP",
        Label::Mask => "MÁSCARA",
        Label::Network => "RED",
        Label::Broadcast => "BROADCAST",
        Label::FirstHost => "PRIMER HOST",
        Label::LastHost => "ÚLTIMO HOST",
        Label::UsableHosts => "HOSTS USABLES",
        Label::TotalAddresses => "TOTAL IPs",
        Label::Private => "✓ PRIVADA",
        Label::Public => "PÚBLICA",
        Label::Class => "CLASE",
        Label::Loopback => "LOOPBACK",
        Label::Binary => "REPRESENTACIÓN BINARIA",
        Label::Error => "Error al analizar",
    }
}

fn english(label: Label) -> Option<&'static str> {
    let text = match label {
        Label::Address => "IP ADDRESS",
        Label::Mask => "MASK",
        Label::Network => "NETWORK",
        Label::FirstHost => "FIRST HOST",
        Label::LastHost => "LAST HOST",
        Label::UsableHosts => "USABLE HOSTS",
        Label::Private => "✓ PRIVATE",
        Label::Public => "PUBLIC",
        Label::Class => "CLASS",
        Label::Binary => "BINARY REPRESENTATION",
        Label::Error => "Analysis failed",
        // same wording as Spanish
        Label::Broadcast | Label::TotalAddresses | Label::Loopback => return None,
    };
    Some(text)
}

/// Text of `label` in `lang`.
pub fn label(lang: Lang, label: Label) -> &'static str {
    match lang {
        Lang::Es => spanish(label),
        Lang::En => english(label).unwrap_or_else(|| spanish(label)),
    }
}

fn spanish_fault(fault: &AddressFault) -> String {
    match fault {
        AddressFault::OctetCount(count) => format!("se esperaban 4 octetos, hay {count}"),
        AddressFault::NotANumber { position, octet } => {
            format!("el octeto {position} '{octet}' no es un número")
        }
        AddressFault::OutOfRange { position, octet } => {
            format!("el octeto {position} '{octet}' está fuera del rango 0-255")
        }
    }
}

fn spanish_error(err: &ParseError) -> String {
    match err {
        ParseError::InvalidCidrFormat { input } => format!("CIDR inválido: '{input}'"),
        ParseError::InvalidPrefix { prefix } => {
            format!("prefijo inválido: '{prefix}' (debe ser 0-32)")
        }
        ParseError::InvalidAddress { address, reason } => {
            format!("IP inválida '{address}': {}", spanish_fault(reason))
        }
    }
}

/// Message for a parse error in `lang`. English is the error's own text.
pub fn error_message(err: &ParseError, lang: Lang) -> String {
    match lang {
        Lang::Es => spanish_error(err),
        Lang::En => err.to_string(),
    }
}
