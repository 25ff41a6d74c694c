//! Abstract interface extraction from C++ headers.
//!
//! Only what a bridge needs is recovered: the interface name, the keyword it
//! was declared with and its pure virtual methods. Anything else in the
//! header (destructors, defaulted members, other declarations) is ignored.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{Error, Result};

static COMMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/|//[^\n]*").unwrap());

static DECL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?<enum>enum\s+)?(?<keyword>class|struct)\s+(?<name>\w+)\s*(?:final\s*)?(?::[^;{]*)?\{").unwrap()
});

static METHOD_HEAD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"virtual\s+(?<ret>[\w:<>,&\s*\[\]]+?)\s*\b(?<name>\w+)\s*\(").unwrap()
});

// What must follow the parameter list of a pure virtual method.
static PURE_TAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?<const>const)?\s*(?:noexcept\s*)?(?:override\s*)?=\s*0\s*;").unwrap()
});

const QUALIFIERS: &[&str] = &["const", "volatile", "struct", "class", "enum", "typename"];

// `unsigned` and `signed` are complete types on their own.
const BUILTIN_TYPES: &[&str] = &[
    "void", "bool", "char", "wchar_t", "char8_t", "char16_t", "char32_t", "short", "int", "long",
    "float", "double", "auto", "unsigned", "signed",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    pub name:    String,
    /// `class` or `struct`, reused for the forward declaration.
    pub keyword: String,
    pub methods: Vec<Method>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub return_type: String,
    pub name:        String,
    pub params:      Vec<Param>,
    pub is_const:    bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    /// Type and name, without any default value.
    pub decl:    String,
    pub name:    String,
    pub default: Option<String>,
}

impl Method {
    pub fn returns_value(&self) -> bool { self.return_type != "void" }

    /// Parameter list for the header, defaults kept.
    pub fn declaration_params(&self) -> String {
        self.params
            .iter()
            .map(|p| match &p.default {
                Some(d) => format!("{} = {}", p.decl, d),
                None => p.decl.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parameter list for the out-of-line definition, defaults dropped.
    pub fn definition_params(&self) -> String {
        self.params
            .iter()
            .map(|p| p.decl.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn arg_names(&self) -> String {
        self.params
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Returns the text between the brace at `start` and its match, and the
/// index just past the closing brace.
pub fn extract_braced_block(text: &str, start: usize) -> Result<(&str, usize)> {
    if text.as_bytes().get(start) != Some(&b'{') {
        return Err(Error::InvalidBraceStart(start));
    }
    scan_delimited(text, start, b'{', b'}').ok_or(Error::UnbalancedBraces)
}

/// Nesting-aware scan from the `open` byte at `start` to its matching
/// `close`. `None` when `start` is not `open` or the pair never closes.
fn scan_delimited(text: &str, start: usize, open: u8, close: u8) -> Option<(&str, usize)> {
    let bytes = text.as_bytes();
    if bytes.get(start) != Some(&open) {
        return None;
    }

    let mut depth = 1usize;
    for (i, &b) in bytes.iter().enumerate().skip(start + 1) {
        if b == open {
            depth += 1;
        } else if b == close {
            depth -= 1;
            if depth == 0 {
                return Some((&text[start + 1..i], i + 1));
            }
        }
    }
    None
}

/// Finds the first class or struct in `header` with pure virtual methods.
pub fn parse_interface(header: &str) -> Result<Interface> {
    let text = COMMENT_REGEX.replace_all(header, "");
    let mut first_candidate: Option<String> = None;

    for caps in DECL_REGEX.captures_iter(&text) {
        if caps.name("enum").is_some() {
            continue;
        }

        let name = caps["name"].to_string();
        let open = caps.get(0).map(|m| m.end() - 1).unwrap_or_default();
        let (body, _) = extract_braced_block(&text, open)?;
        let methods = parse_methods(body);

        if !methods.is_empty() {
            debug!(interface = %name, methods = methods.len(), "found interface");
            return Ok(Interface {
                name,
                keyword: caps["keyword"].to_string(),
                methods,
            });
        }

        debug!(candidate = %name, "skipping declaration without pure virtual methods");
        first_candidate.get_or_insert(name);
    }

    match first_candidate {
        Some(class) => Err(Error::NoPureVirtual { class }),
        None => Err(Error::NoInterface),
    }
}

fn parse_methods(body: &str) -> Vec<Method> {
    let mut methods = Vec::new();

    for caps in METHOD_HEAD_REGEX.captures_iter(body) {
        let open = caps.get(0).map(|m| m.end() - 1).unwrap_or_default();
        let Some((params, end)) = scan_delimited(body, open, b'(', b')') else {
            warn!(method = %&caps["name"], "unbalanced parameter list, method skipped");
            continue;
        };
        let Some(tail) = PURE_TAIL_REGEX.captures(&body[end..]) else {
            continue;
        };

        methods.push(Method {
            return_type: normalize_space(&caps["ret"]),
            name:        caps["name"].to_string(),
            params:      parse_params(params),
            is_const:    tail.name("const").is_some(),
        });
    }

    methods
}

fn parse_params(params: &str) -> Vec<Param> {
    let params = params.trim();
    if params.is_empty() || params == "void" {
        return Vec::new();
    }

    let parts: Vec<(String, Option<String>)> =
        split_top_level(params, ',').into_iter().map(split_default).collect();
    let mut taken: HashSet<String> =
        parts.iter().filter_map(|(decl, _)| declared_name(decl)).collect();

    parts
        .into_iter()
        .enumerate()
        .map(|(i, (decl, default))| match declared_name(&decl) {
            Some(name) => Param { decl, name, default },
            None => {
                let name = synthesize_name(i, &mut taken);
                Param {
                    decl: format!("{decl} {name}"),
                    name,
                    default,
                }
            }
        })
        .collect()
}

fn split_default(raw: &str) -> (String, Option<String>) {
    match split_top_level(raw, '=').as_slice() {
        [decl, rest @ ..] if !rest.is_empty() => {
            (normalize_space(decl), Some(rest.join("=").trim().to_string()))
        }
        _ => (normalize_space(raw), None),
    }
}

/// `arg<index>`, suffixed with `_` until it clashes with no other parameter.
fn synthesize_name(index: usize, taken: &mut HashSet<String>) -> String {
    let mut name = format!("arg{index}");
    while taken.contains(&name) {
        name.push('_');
    }
    taken.insert(name.clone());
    name
}

/// Name of a declared parameter, or `None` when only a type was written.
fn declared_name(decl: &str) -> Option<String> {
    let without_array = match decl.find('[') {
        Some(i) => decl[..i].trim_end(),
        None => decl,
    };
    if without_array.ends_with(['*', '&']) {
        return None;
    }

    let stripped = strip_template_args(without_array);
    let words: Vec<&str> = stripped
        .split(|c: char| c.is_whitespace() || c == '*' || c == '&')
        .filter(|w| !w.is_empty() && !QUALIFIERS.contains(w))
        .collect();

    match words.as_slice() {
        [.., _, last] if !BUILTIN_TYPES.contains(last) && is_identifier(last) => {
            Some(last.to_string())
        }
        _ => None,
    }
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn strip_template_args(text: &str) -> String {
    let mut depth = 0usize;
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Splits on `sep` where it is not nested in `<>`, `()`, `[]` or `{}`.
fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        match c {
            '<' | '(' | '[' | '{' => depth += 1,
            '>' | ')' | ']' | '}' => depth = depth.saturating_sub(1),
            c if c == sep && depth == 0 => {
                parts.push(text[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(text[start..].trim());
    parts
}

fn normalize_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const IWORK_H: &str = r#"#pragma once

// Public stable interface
struct IWork {
    virtual void DoWork() = 0;
    virtual ~IWork() = default;
};
"#;

    #[test]
    fn test_extract_braced_block_nested() {
        let text = "x { a { b } c } tail";
        let (block, end) = extract_braced_block(text, 2).unwrap();

        assert_eq!(block, " a { b } c ");
        assert_eq!(&text[end..], " tail");
    }

    #[test]
    fn test_extract_braced_block_errors() {
        assert!(matches!(extract_braced_block("abc", 1), Err(Error::InvalidBraceStart(1))));
        assert!(matches!(extract_braced_block("{", 5), Err(Error::InvalidBraceStart(5))));
        assert!(matches!(extract_braced_block("{ { }", 0), Err(Error::UnbalancedBraces)));
    }

    #[test]
    fn test_parse_struct_interface() {
        let iface = parse_interface(IWORK_H).unwrap();

        assert_eq!(iface.name, "IWork");
        assert_eq!(iface.keyword, "struct");
        assert_eq!(iface.methods.len(), 1);

        let m = &iface.methods[0];
        assert_eq!(m.return_type, "void");
        assert_eq!(m.name, "DoWork");
        assert!(m.params.is_empty());
        assert!(!m.is_const);
        assert!(!m.returns_value());
    }

    #[test]
    fn test_parse_methods_with_params_and_const() {
        let header = r#"
class IStore : public IBase {
public:
    virtual ~IStore() = default;
    virtual std::string Get(const std::string& key) const = 0;
    virtual bool Put(const std::string& key, std::map<int, long> values, int retries = 3) = 0;
    virtual int *Raw(void) = 0;
    virtual void Helper() {}
};
"#;
        let iface = parse_interface(header).unwrap();

        assert_eq!(iface.name, "IStore");
        assert_eq!(iface.keyword, "class");
        let names: Vec<_> = iface.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Get", "Put", "Raw"]);

        let get = &iface.methods[0];
        assert_eq!(get.return_type, "std::string");
        assert!(get.is_const);
        assert_eq!(get.arg_names(), "key");

        let put = &iface.methods[1];
        assert_eq!(put.arg_names(), "key, values, retries");
        assert_eq!(
            put.declaration_params(),
            "const std::string& key, std::map<int, long> values, int retries = 3"
        );
        assert_eq!(
            put.definition_params(),
            "const std::string& key, std::map<int, long> values, int retries"
        );

        let raw = &iface.methods[2];
        assert_eq!(raw.return_type, "int *");
        assert!(raw.params.is_empty());
    }

    #[test]
    fn test_unnamed_params_get_synthesized_names() {
        let header = "class ISink { virtual void Write(const Buffer&, unsigned long, int flags) = 0; };";
        let iface = parse_interface(header).unwrap();
        let m = &iface.methods[0];

        assert_eq!(m.arg_names(), "arg0, arg1, flags");
        assert_eq!(m.definition_params(), "const Buffer& arg0, unsigned long arg1, int flags");
    }

    #[test]
    fn test_parens_inside_params() {
        let header = r#"
struct IBus {
    virtual void DoWork() = 0;
    virtual void Subscribe(std::function<void(int)> cb, std::function<bool(int, int)> pred) = 0;
    virtual void Wait(int ms = f(1, 2)) const = 0;
    virtual void Helper(std::function<void()> cb) {}
};
"#;
        let iface = parse_interface(header).unwrap();
        let names: Vec<_> = iface.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["DoWork", "Subscribe", "Wait"]);

        let subscribe = &iface.methods[1];
        assert_eq!(subscribe.arg_names(), "cb, pred");
        assert_eq!(
            subscribe.definition_params(),
            "std::function<void(int)> cb, std::function<bool(int, int)> pred"
        );

        let wait = &iface.methods[2];
        assert!(wait.is_const);
        assert_eq!(wait.declaration_params(), "int ms = f(1, 2)");
        assert_eq!(wait.definition_params(), "int ms");
    }

    #[test]
    fn test_sign_keyword_alone_is_a_type() {
        let header = "struct IFoo { virtual void Set(unsigned count, signed delta, unsigned) = 0; };";
        let m = &parse_interface(header).unwrap().methods[0];

        assert_eq!(m.arg_names(), "count, delta, arg2");
        assert_eq!(m.definition_params(), "unsigned count, signed delta, unsigned arg2");
    }

    #[test]
    fn test_synthesized_names_avoid_declared_ones() {
        let header = "struct IPair { virtual void Set(int, int arg0, long) = 0; };";
        let m = &parse_interface(header).unwrap().methods[0];

        assert_eq!(m.arg_names(), "arg0_, arg0, arg2");
        assert_eq!(m.definition_params(), "int arg0_, int arg0, long arg2");
    }

    #[test]
    fn test_unbalanced_param_list_is_skipped() {
        let header = "struct IOdd { virtual void Ok() = 0; virtual void Bad(int (x = 0; };";
        let iface = parse_interface(header).unwrap();

        assert_eq!(iface.methods.len(), 1);
        assert_eq!(iface.methods[0].name, "Ok");
    }

    #[test]
    fn test_skips_enum_class_and_forward_declarations() {
        let header = r#"
class Fwd;
enum class Mode { A, B };
template <class T> class IThing {
    virtual T Make() = 0;
};
"#;
        let iface = parse_interface(header).unwrap();

        assert_eq!(iface.name, "IThing");
        assert_eq!(iface.methods[0].return_type, "T");
    }

    #[test]
    fn test_commented_methods_are_ignored() {
        let header = r#"
struct IWork {
    // virtual void Old() = 0;
    /* virtual void Older() = 0; */
    virtual void DoWork() = 0;
};
"#;
        let iface = parse_interface(header).unwrap();

        assert_eq!(iface.methods.len(), 1);
        assert_eq!(iface.methods[0].name, "DoWork");
    }

    #[test]
    fn test_later_interface_is_found() {
        let header = "struct Plain { int x; };\nstruct IWork { virtual void DoWork() = 0; };";

        assert_eq!(parse_interface(header).unwrap().name, "IWork");
    }

    #[test]
    fn test_no_interface() {
        assert!(matches!(parse_interface("int main() { return 0; }"), Err(Error::NoInterface)));
        assert!(matches!(
            parse_interface("struct Plain { int x; };"),
            Err(Error::NoPureVirtual { class }) if class == "Plain"
        ));
    }
}
