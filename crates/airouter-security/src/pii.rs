// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pattern-based PII redaction for research notes and prompts.
//!
//! Rules run in a fixed order, each once over the whole text. Later rules see
//! the output of earlier ones, so a phone number is claimed by the phone rule
//! before the generic digit-run rule can turn it into an `[ID]`.
//!
//! Every rule that can follow another starts and ends on a word boundary and
//! every whitespace separator accepts a whole run, which keeps [`sanitize`]
//! idempotent across the final whitespace collapse.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Default maximum length for [`preview`].
pub const DEFAULT_PREVIEW_LEN: usize = 200;

const ELLIPSIS: &str = "...";

/// Common first and last names. Accented letters also match their plain form.
const COMMON_NAMES: &[&str] = &[
    "Juan", "Jos[eé]", "Luis", "Carlos", "Andr[eé]s", "Jorge", "Pedro", "Santiago",
    "Sebasti[aá]n", "Daniel", "Alejandro", "Felipe", "Mar[ií]a", "Ana", "Laura", "Camila",
    "Valentina", "Sof[ií]a", "Daniela", "Paula", "Diana", "Carolina", "Natalia", "Andrea",
    "Garc[ií]a", "Rodr[ií]guez", "Mart[ií]nez", "L[oó]pez", "Gonz[aá]lez", "Hern[aá]ndez",
    "P[eé]rez", "S[aá]nchez", "Ram[ií]rez", "Torres", "G[oó]mez", "D[ií]az", "Vargas",
    "Castro", "Rojas", "Moreno", "Jim[eé]nez", "Mu[nñ]oz",
];

/// One redaction step: every match of `pattern` becomes `placeholder`.
struct Rule {
    pattern: Regex,
    placeholder: &'static str,
}

impl Rule {
    fn new(pattern: &str, placeholder: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            placeholder,
        }
    }
}

const EMAIL: &str = r"[\w.+-]+@[\w-]+\.[\w.-]+";
const MOBILE_PHONE: &str =
    r"(?:\+57(?:\s+|-)?|\b)3\d{2}(?:\s+|[.-])?\d{3}(?:\s+|[.-])?\d{4}\b";
const LANDLINE_PHONE: &str =
    r"(?:\+\d{1,3}(?:\s+|-)?)?\(\d{1,4}\)(?:\s+|[.-])?\d{3}(?:\s+|[.-])?\d{4}\b";
const NATIONAL_ID: &str = r"\b\d{6,10}\b";
const ADDRESS: &str = r"(?i)\b(?:calle|carrera|avenida|diagonal|transversal|cra|cll|cl|kr|av|dg|tv)\.?\s*\d+[a-z]?(?:\s*(?:#|no\.?|n°)\s*\d+[a-z]?(?:\s*-\s*\d+)?)?\b";
const POSTAL_CODE: &str = r"\b\d{5}\b";
const URL: &str = r"\b(?:https?://|www\.)\S+";
const CARD: &str = r"\b(?:\d{4}(?:\s+|-)?){3}\d{4}\b";

/// Sanitization rules in application order.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let names = format!(r"\b(?:{})\b", COMMON_NAMES.join("|"));
    vec![
        Rule::new(EMAIL, "[EMAIL]"),
        Rule::new(MOBILE_PHONE, "[PHONE]"),
        Rule::new(LANDLINE_PHONE, "[PHONE]"),
        Rule::new(NATIONAL_ID, "[ID]"),
        Rule::new(&names, "[NAME]"),
        Rule::new(ADDRESS, "[ADDRESS]"),
        Rule::new(POSTAL_CODE, "[POSTAL_CODE]"),
        Rule::new(URL, "[URL]"),
        Rule::new(CARD, "[CARD]"),
    ]
});

/// Reduced pattern set for [`contains_pii`].
static DETECTORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [EMAIL, MOBILE_PHONE, LANDLINE_PHONE, NATIONAL_ID, CARD]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Replace PII in `text` with placeholder tokens.
///
/// Applies email, phone, national id, name, address, postal code, URL and
/// card rules in that order, then collapses whitespace runs and trims.
pub fn sanitize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut result = text.to_string();
    for rule in RULES.iter() {
        if let std::borrow::Cow::Owned(replaced) =
            rule.pattern.replace_all(&result, rule.placeholder)
        {
            result = replaced;
        }
    }

    WHITESPACE_RUN.replace_all(&result, " ").trim().to_string()
}

/// True if `text` contains an email, phone number, id-like digit run, or card number.
///
/// Stops at the first matching pattern; does not sanitize.
pub fn contains_pii(text: &str) -> bool {
    !text.is_empty() && DETECTORS.iter().any(|re| re.is_match(text))
}

/// Sanitize `text` and cut it to at most `max_len` characters plus an ellipsis.
pub fn preview(text: &str, max_len: usize) -> String {
    let sanitized = sanitize(text);
    match sanitized.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &sanitized[..cut]),
        None => sanitized,
    }
}

/// Sanitize every string inside a JSON value in place. Keys are left alone.
pub fn sanitize_json(value: &mut Value) {
    match value {
        Value::String(s) => *s = sanitize(s),
        Value::Array(items) => items.iter_mut().for_each(sanitize_json),
        Value::Object(map) => map.values_mut().for_each(sanitize_json),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn email_and_phone_redacted_left_to_right() {
        let out = sanitize("Mi correo es juan@test.com y mi tel es 3001234567");
        assert_eq!(out, "Mi correo es [EMAIL] y mi tel es [PHONE]");
    }

    #[test]
    fn empty_input_is_unchanged() {
        assert_eq!(sanitize(""), "");
        assert!(!contains_pii(""));
    }

    #[test]
    fn mobile_formats() {
        assert_eq!(sanitize("llamar al 300 123 4567"), "llamar al [PHONE]");
        assert_eq!(sanitize("llamar al 300-123-4567"), "llamar al [PHONE]");
        assert_eq!(sanitize("llamar al +57 300 123 4567"), "llamar al [PHONE]");
        assert_eq!(sanitize("llamar al +573001234567"), "llamar al [PHONE]");
    }

    #[test]
    fn landline_with_area_code() {
        assert_eq!(sanitize("oficina (601) 234 5678"), "oficina [PHONE]");
        assert_eq!(sanitize("oficina +57 (601) 234-5678"), "oficina [PHONE]");
    }

    #[test]
    fn phone_rule_runs_before_generic_digit_run() {
        // Ten digits starting with 3 would also be an id-like run.
        assert_eq!(sanitize("3001234567"), "[PHONE]");
        assert_eq!(sanitize("cedula 1020304050"), "cedula [ID]");
    }

    #[test]
    fn national_id_lengths() {
        assert_eq!(sanitize("cc 123456"), "cc [ID]");
        assert_eq!(sanitize("cc 12345678901"), "cc 12345678901");
    }

    #[test]
    fn common_names_with_and_without_accents() {
        assert_eq!(
            sanitize("Entrevista con María Rodríguez"),
            "Entrevista con [NAME] [NAME]"
        );
        assert_eq!(sanitize("Maria Rodriguez"), "[NAME] [NAME]");
        // Lowercase words are not treated as names.
        assert_eq!(sanitize("la ana tomia"), "la ana tomia");
    }

    #[test]
    fn street_addresses() {
        assert_eq!(sanitize("vive en Calle 45 # 12-30 sur"), "vive en [ADDRESS] sur");
        assert_eq!(sanitize("Cra. 7 No. 32-16"), "[ADDRESS]");
        assert_eq!(sanitize("av 68"), "[ADDRESS]");
    }

    #[test]
    fn postal_codes() {
        assert_eq!(sanitize("CP 05001"), "CP [POSTAL_CODE]");
    }

    #[test]
    fn urls() {
        assert_eq!(
            sanitize("perfil en https://linkedin.com/in/someone ok"),
            "perfil en [URL] ok"
        );
        assert_eq!(sanitize("ver www.example.org/x"), "ver [URL]");
    }

    #[test]
    fn card_numbers() {
        assert_eq!(sanitize("tarjeta 4111 1111 1111 1111"), "tarjeta [CARD]");
        assert_eq!(sanitize("tarjeta 4111-1111-1111-1111"), "tarjeta [CARD]");
        assert_eq!(sanitize("tarjeta 4111111111111111"), "tarjeta [CARD]");
    }

    #[test]
    fn email_inside_url_is_claimed_first() {
        assert_eq!(sanitize("https://user@host.com/x"), "[URL]");
    }

    #[test]
    fn whitespace_collapsed_and_trimmed() {
        assert_eq!(sanitize("  hola \n\t mundo  "), "hola mundo");
    }

    #[test]
    fn text_without_pii_passes_through() {
        let input = "El participante prefiere el flujo de registro corto";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn contains_pii_examples() {
        assert!(contains_pii("contact me at a@b.com"));
        assert!(!contains_pii("hello world"));
        assert!(contains_pii("mi numero es 300 123 4567"));
        assert!(contains_pii("4111 1111 1111 1111"));
        // Names alone are not part of the quick check.
        assert!(!contains_pii("Juan"));
    }

    #[test]
    fn preview_truncates_after_sanitizing() {
        let long = format!("escribir a a@b.com {}", "x".repeat(300));
        let out = preview(&long, DEFAULT_PREVIEW_LEN);
        assert!(out.starts_with("escribir a [EMAIL] "));
        assert!(out.ends_with(ELLIPSIS));
        assert_eq!(out.chars().count(), DEFAULT_PREVIEW_LEN + ELLIPSIS.len());
    }

    #[test]
    fn preview_keeps_short_text() {
        assert_eq!(preview("hola  mundo", 200), "hola mundo");
        assert_eq!(preview("abc", 3), "abc");
        assert_eq!(preview("abcd", 3), "abc...");
    }

    #[test]
    fn preview_cuts_on_char_boundary() {
        assert_eq!(preview("ñañañaña", 3), "ñañ...");
    }

    #[test]
    fn sanitize_json_walks_nested_values() {
        let mut value = serde_json::json!({
            "notes": "escribir a a@b.com",
            "quotes": ["llamar 3001234567", 42],
            "meta": {"owner": "Laura"}
        });
        sanitize_json(&mut value);
        assert_eq!(value["notes"], "escribir a [EMAIL]");
        assert_eq!(value["quotes"][0], "llamar [PHONE]");
        assert_eq!(value["quotes"][1], 42);
        assert_eq!(value["meta"]["owner"], "[NAME]");
    }

    fn fragment() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Juan".to_string()),
            Just("María".to_string()),
            Just("3001234567".to_string()),
            Just("+57".to_string()),
            Just("(601)".to_string()),
            Just("calle 45 # 12-30".to_string()),
            Just("a@b.co".to_string()),
            Just("http://x.co/a".to_string()),
            Just("www.".to_string()),
            Just("12345".to_string()),
            Just("1234".to_string()),
            Just("4111 1111 1111 1111".to_string()),
            Just("[EMAIL]".to_string()),
            Just("  ".to_string()),
            Just("\t".to_string()),
            Just("-".to_string()),
            "[a-z0-9@.#+()-]{1,6}",
        ]
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent_on_pii_fragments(
            parts in proptest::collection::vec(fragment(), 0..12),
            seps in proptest::collection::vec(prop_oneof![Just(""), Just(" "), Just("  ")], 12),
        ) {
            let text: String = parts
                .iter()
                .zip(seps.iter())
                .map(|(p, s)| format!("{p}{s}"))
                .collect();
            let once = sanitize(&text);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn sanitize_is_idempotent_on_printable_ascii(text in "[ -~]{0,64}") {
            let once = sanitize(&text);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn sanitized_email_leaves_no_address(
            prefix in "[a-z ]{0,10}",
            email in "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,3}",
        ) {
            let out = sanitize(&format!("{prefix} {email}"));
            prop_assert!(!out.contains('@'));
            prop_assert!(!contains_pii(&out));
        }
    }
}
