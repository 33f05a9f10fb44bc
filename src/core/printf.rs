//! Printf-style expansion of message templates
//!
//! Templates use positional directives (`%d`, `%s`, `%v`, `%5.2f`, ...) that
//! consume [`Param`]s in order. Expansion never fails: a directive whose
//! parameter has the wrong type, a missing parameter, or surplus parameters
//! produce a degraded but complete message.
//!
//! | Problem | Rendered as |
//! |---|---|
//! | wrong type | `%!d(string=hello)` |
//! | missing parameter | `%!d(MISSING)` |
//! | surplus parameters | `%!(EXTRA int=3, string=x)` |
//! | `%` at end of template | `%!(NOVERB)` |
//! | width above 1e6 | `%!(BADWIDTH)`, then the verb without width |
//! | precision above 1e6 | `%!(BADPREC)`, then the verb without precision |

use super::param::Param;
use std::fmt::Write;

/// Largest accepted width or precision
const MAX_NUMBER: usize = 1_000_000;

#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    minus: bool,
    plus: bool,
    sharp: bool,
    space: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Expand `template` with `params`.
///
/// # Example
///
/// ```
/// use rust_logops::{params, printf::sprintf};
///
/// assert_eq!(sprintf("%d y %d son %d", &params![2, 2, 4]), "2 y 2 son 4");
/// assert_eq!(sprintf("%s has %.1f%%", &params!["disk", 93.27]), "disk has 93.3%");
/// ```
pub fn sprintf(template: &str, params: &[Param]) -> String {
    let mut out = String::with_capacity(template.len() + params.len() * 8);
    write_formatted(&mut out, template, params);
    out
}

/// Expand `template` with `params`, appending to `out`.
pub fn write_formatted(out: &mut String, template: &str, params: &[Param]) {
    let mut chars = template.chars().peekable();
    let mut next_param = 0usize;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                '#' => spec.sharp = true,
                ' ' => spec.space = true,
                '0' => spec.zero = true,
                _ => break,
            }
            chars.next();
        }
        spec.width = parse_number(&mut chars);
        if spec.width.is_some_and(|width| width > MAX_NUMBER) {
            out.push_str("%!(BADWIDTH)");
            spec.width = None;
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            let precision = parse_number(&mut chars).unwrap_or(0);
            if precision > MAX_NUMBER {
                out.push_str("%!(BADPREC)");
            } else {
                spec.precision = Some(precision);
            }
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };

        if verb == '%' {
            out.push('%');
            continue;
        }

        match params.get(next_param) {
            Some(param) => {
                next_param += 1;
                format_param(out, verb, &spec, param);
            }
            None => {
                let _ = write!(out, "%!{}(MISSING)", verb);
            }
        }
    }

    if next_param < params.len() {
        out.push_str("%!(EXTRA ");
        for (i, param) in params[next_param..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={}", param.type_name(), param);
        }
        out.push(')');
    }
}

fn parse_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
        chars.next();
    }
    value
}

fn format_param(out: &mut String, verb: char, spec: &Spec, param: &Param) {
    let rendered = match (verb, param) {
        ('v', Param::Str(s)) | ('s', Param::Str(s)) => Some(pad_text(truncate(s, spec), spec)),
        ('v', Param::Char(c)) | ('s', Param::Char(c)) => Some(pad_text(c.to_string(), spec)),
        ('v', Param::Bool(b)) | ('t', Param::Bool(b)) => Some(pad_text(b.to_string(), spec)),
        ('v', Param::Int(i)) | ('d', Param::Int(i)) => {
            Some(pad_number(signed(*i < 0, i.unsigned_abs().to_string(), spec), spec))
        }
        ('v', Param::Uint(u)) | ('d', Param::Uint(u)) => {
            Some(pad_number(signed(false, u.to_string(), spec), spec))
        }
        ('d', Param::Char(c)) => Some(pad_number(signed(false, (*c as u32).to_string(), spec), spec)),
        ('v', Param::Float(f)) => Some(pad_number(format_g(*f, None, spec), spec)),
        ('x' | 'X' | 'o' | 'b', Param::Int(i)) => {
            Some(pad_number(radix(*i < 0, i.unsigned_abs(), verb, spec), spec))
        }
        ('x' | 'X' | 'o' | 'b', Param::Uint(u)) => {
            Some(pad_number(radix(false, *u, verb, spec), spec))
        }
        ('x' | 'X', Param::Str(s)) => {
            let mut hex = String::with_capacity(s.len() * 2);
            for byte in s.bytes() {
                if verb == 'x' {
                    let _ = write!(hex, "{:02x}", byte);
                } else {
                    let _ = write!(hex, "{:02X}", byte);
                }
            }
            Some(pad_text(hex, spec))
        }
        ('c', Param::Char(c)) => Some(pad_text(c.to_string(), spec)),
        ('c', Param::Int(_) | Param::Uint(_)) | ('q', Param::Int(_) | Param::Uint(_)) => {
            let code = match param {
                Param::Int(i) => u32::try_from(*i).ok(),
                Param::Uint(u) => u32::try_from(*u).ok(),
                _ => None,
            };
            let c = code.and_then(char::from_u32).unwrap_or(char::REPLACEMENT_CHARACTER);
            if verb == 'c' {
                Some(pad_text(c.to_string(), spec))
            } else {
                Some(pad_text(format!("{:?}", c), spec))
            }
        }
        ('q', Param::Str(s)) => Some(pad_text(format!("{:?}", s), spec)),
        ('q', Param::Char(c)) => Some(pad_text(format!("{:?}", c), spec)),
        ('f' | 'F', Param::Float(f)) => Some(pad_number(format_f(*f, spec), spec)),
        ('e' | 'E', Param::Float(f)) => Some(pad_number(format_e(*f, verb == 'E', spec), spec)),
        ('g' | 'G', Param::Float(f)) => {
            let g = format_g(*f, spec.precision, spec);
            Some(pad_number(if verb == 'G' { g.to_uppercase() } else { g }, spec))
        }
        _ => None,
    };

    match rendered {
        Some(text) => out.push_str(&text),
        None => {
            let _ = write!(out, "%!{}({}={})", verb, param.type_name(), param);
        }
    }
}

fn truncate(s: &str, spec: &Spec) -> String {
    match spec.precision {
        Some(p) => s.chars().take(p).collect(),
        None => s.to_string(),
    }
}

fn signed(negative: bool, digits: String, spec: &Spec) -> String {
    if negative {
        format!("-{}", digits)
    } else if spec.plus {
        format!("+{}", digits)
    } else if spec.space {
        format!(" {}", digits)
    } else {
        digits
    }
}

fn radix(negative: bool, value: u64, verb: char, spec: &Spec) -> String {
    let (prefix, digits) = match verb {
        'x' => ("0x", format!("{:x}", value)),
        'X' => ("0X", format!("{:X}", value)),
        'o' => ("0", format!("{:o}", value)),
        _ => ("0b", format!("{:b}", value)),
    };
    let body = if spec.sharp {
        format!("{}{}", prefix, digits)
    } else {
        digits
    };
    signed(negative, body, spec)
}

fn non_finite(f: f64, spec: &Spec) -> Option<String> {
    if f.is_nan() {
        Some("NaN".to_string())
    } else if f.is_infinite() {
        if f < 0.0 {
            Some("-Inf".to_string())
        } else if spec.space && !spec.plus {
            Some(" Inf".to_string())
        } else {
            Some("+Inf".to_string())
        }
    } else {
        None
    }
}

fn format_f(f: f64, spec: &Spec) -> String {
    if let Some(s) = non_finite(f, spec) {
        return s;
    }
    let digits = format!("{:.*}", spec.precision.unwrap_or(6), f.abs());
    signed(f.is_sign_negative(), digits, spec)
}

/// Rust renders `1.5e3`; directives expect `1.5e+03`
fn normalize_exponent(rendered: &str, upper: bool) -> String {
    match rendered.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            let e = if upper { 'E' } else { 'e' };
            format!("{}{}{}{:02}", mantissa, e, sign, exp.abs())
        }
        None => rendered.to_string(),
    }
}

fn format_e(f: f64, upper: bool, spec: &Spec) -> String {
    if let Some(s) = non_finite(f, spec) {
        return s;
    }
    let rendered = format!("{:.*e}", spec.precision.unwrap_or(6), f.abs());
    signed(f.is_sign_negative(), normalize_exponent(&rendered, upper), spec)
}

fn strip_trailing_zeros(s: &str) -> String {
    if let Some((mantissa, exp)) = s.split_once('e') {
        return format!("{}e{}", strip_trailing_zeros(mantissa), exp);
    }
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

fn format_g(f: f64, precision: Option<usize>, spec: &Spec) -> String {
    if let Some(s) = non_finite(f, spec) {
        return s;
    }
    let abs = f.abs();
    let body = match precision {
        None => {
            let sci = format!("{:e}", abs);
            let exp: i32 = sci
                .split_once('e')
                .and_then(|(_, e)| e.parse().ok())
                .unwrap_or(0);
            if exp < -4 || exp >= 21 {
                normalize_exponent(&sci, false)
            } else {
                format!("{}", abs)
            }
        }
        Some(p) => {
            let p = p.max(1);
            let sci = format!("{:.*e}", p - 1, abs);
            let exp: i32 = sci
                .split_once('e')
                .and_then(|(_, e)| e.parse().ok())
                .unwrap_or(0);
            let rendered = if exp < -4 || exp >= p as i32 {
                normalize_exponent(&sci, false)
            } else {
                let decimals = (p as i32 - 1 - exp).max(0) as usize;
                format!("{:.*}", decimals, abs)
            };
            if spec.sharp {
                rendered
            } else {
                strip_trailing_zeros(&rendered)
            }
        }
    };
    signed(f.is_sign_negative(), body, spec)
}

fn pad_text(text: String, spec: &Spec) -> String {
    let len = text.chars().count();
    match spec.width {
        Some(width) if width > len => {
            let fill = " ".repeat(width - len);
            if spec.minus {
                text + &fill
            } else {
                fill + &text
            }
        }
        _ => text,
    }
}

fn pad_number(text: String, spec: &Spec) -> String {
    let len = text.chars().count();
    match spec.width {
        Some(width) if width > len && spec.zero && !spec.minus => {
            let split = text
                .char_indices()
                .find(|(_, c)| !matches!(c, '+' | '-' | ' '))
                .map(|(i, _)| i)
                .unwrap_or(0);
            let (sign, digits) = text.split_at(split);
            format!("{}{}{}", sign, "0".repeat(width - len), digits)
        }
        _ => pad_text(text, spec),
    }
}
