// src/core/document.rs
//! Typed access into raw response documents.
//!
//! A response is a `serde_json::Value`, the tagged union over
//! object/array/string/number/bool/null. Nothing here indexes it dynamically:
//! every read goes through a [`PathSpec`] and either yields the expected type
//! or a precise error naming the path.
//!
//! `null` and absence are the same thing upstream (GraphQL sends `null` for
//! fields it has nothing for), so both resolve to "missing".

use serde_json::Value;

use crate::error::{ExtractError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seg {
    Key(&'static str),
    Index(usize),
}

/// Ordered keys/indices locating a value. Always a `const`.
pub type PathSpec = &'static [Seg];

pub fn path_string(path: &[Seg]) -> String {
    let mut out = s!();
    for seg in path {
        match seg {
            Seg::Key(k) => {
                if !out.is_empty() { out.push('.'); }
                out.push_str(k);
            }
            Seg::Index(i) => out.push_str(&format!("[{i}]")),
        }
    }
    out
}

fn walk<'a>(doc: &'a Value, path: &[Seg]) -> Result<Option<&'a Value>> {
    let mut cur = doc;
    for (depth, seg) in path.iter().enumerate() {
        let next = match (seg, cur) {
            (_, Value::Null) => return Ok(None),
            (Seg::Key(k), Value::Object(map)) => map.get(*k),
            (Seg::Index(i), Value::Array(items)) => items.get(*i),
            (Seg::Key(_), _) => return Err(mismatch(&path[..depth], "object")),
            (Seg::Index(_), _) => return Err(mismatch(&path[..depth], "array")),
        };
        match next {
            Some(v) => cur = v,
            None => return Ok(None),
        }
    }
    if cur.is_null() { Ok(None) } else { Ok(Some(cur)) }
}

fn mismatch(path: &[Seg], expected: &'static str) -> ExtractError {
    ExtractError::TypeMismatch { path: path_string(path), expected }
}

/// Required lookup: absent or `null` is `MissingField`.
pub fn resolve<'a>(doc: &'a Value, path: &[Seg]) -> Result<&'a Value> {
    walk(doc, path)?.ok_or_else(|| ExtractError::MissingField { path: path_string(path) })
}

/// Optional lookup: absent or `null` is `None`. A container of the wrong
/// type on the way down is still an error.
pub fn resolve_opt<'a>(doc: &'a Value, path: &[Seg]) -> Result<Option<&'a Value>> {
    walk(doc, path)
}

/// Raw GraphQL responses wrap the payload in `{ "data": … }`; saved
/// documents may or may not keep that envelope.
pub fn unwrap_data(doc: &Value) -> &Value {
    match doc.get("data") {
        Some(inner @ Value::Object(_)) => inner,
        _ => doc,
    }
}

fn as_str<'a>(v: &'a Value, path: &[Seg]) -> Result<&'a str> {
    v.as_str().ok_or_else(|| mismatch(path, "string"))
}

fn as_u64(v: &Value, path: &[Seg]) -> Result<u64> {
    v.as_u64().ok_or_else(|| mismatch(path, "non-negative integer"))
}

fn as_i64(v: &Value, path: &[Seg]) -> Result<i64> {
    v.as_i64().ok_or_else(|| mismatch(path, "integer"))
}

fn as_f64(v: &Value, path: &[Seg]) -> Result<f64> {
    v.as_f64().ok_or_else(|| mismatch(path, "number"))
}

fn as_bool(v: &Value, path: &[Seg]) -> Result<bool> {
    v.as_bool().ok_or_else(|| mismatch(path, "bool"))
}

fn as_array<'a>(v: &'a Value, path: &[Seg]) -> Result<&'a Vec<Value>> {
    v.as_array().ok_or_else(|| mismatch(path, "array"))
}

pub fn str_at<'a>(doc: &'a Value, path: &[Seg]) -> Result<&'a str> {
    as_str(resolve(doc, path)?, path)
}

pub fn opt_str_at<'a>(doc: &'a Value, path: &[Seg]) -> Result<Option<&'a str>> {
    resolve_opt(doc, path)?.map(|v| as_str(v, path)).transpose()
}

pub fn u64_at(doc: &Value, path: &[Seg]) -> Result<u64> {
    as_u64(resolve(doc, path)?, path)
}

pub fn opt_u64_at(doc: &Value, path: &[Seg]) -> Result<Option<u64>> {
    resolve_opt(doc, path)?.map(|v| as_u64(v, path)).transpose()
}

/// Counters that must fit in `u32` (kills, deaths, …).
pub fn u32_at(doc: &Value, path: &[Seg]) -> Result<u32> {
    let n = u64_at(doc, path)?;
    u32::try_from(n).map_err(|_| ExtractError::invalid(path_string(path), format!("{n} out of range")))
}

pub fn opt_u32_at(doc: &Value, path: &[Seg]) -> Result<Option<u32>> {
    match opt_u64_at(doc, path)? {
        None => Ok(None),
        Some(n) => u32::try_from(n)
            .map(Some)
            .map_err(|_| ExtractError::invalid(path_string(path), format!("{n} out of range"))),
    }
}

pub fn i64_at(doc: &Value, path: &[Seg]) -> Result<i64> {
    as_i64(resolve(doc, path)?, path)
}

pub fn opt_i64_at(doc: &Value, path: &[Seg]) -> Result<Option<i64>> {
    resolve_opt(doc, path)?.map(|v| as_i64(v, path)).transpose()
}

pub fn f64_at(doc: &Value, path: &[Seg]) -> Result<f64> {
    as_f64(resolve(doc, path)?, path)
}

pub fn opt_f64_at(doc: &Value, path: &[Seg]) -> Result<Option<f64>> {
    resolve_opt(doc, path)?.map(|v| as_f64(v, path)).transpose()
}

pub fn bool_at(doc: &Value, path: &[Seg]) -> Result<bool> {
    as_bool(resolve(doc, path)?, path)
}

pub fn opt_bool_at(doc: &Value, path: &[Seg]) -> Result<Option<bool>> {
    resolve_opt(doc, path)?.map(|v| as_bool(v, path)).transpose()
}

pub fn array_at<'a>(doc: &'a Value, path: &[Seg]) -> Result<&'a [Value]> {
    Ok(as_array(resolve(doc, path)?, path)?.as_slice())
}

pub fn opt_array_at<'a>(doc: &'a Value, path: &[Seg]) -> Result<Option<&'a [Value]>> {
    Ok(resolve_opt(doc, path)?.map(|v| as_array(v, path)).transpose()?.map(Vec::as_slice))
}
