//! Text form of host arguments
//!
//! Strings pass through untouched. Every other value becomes a tagged
//! placeholder such as `<number: 42>` or `<undefined>`, the same text the Go
//! `syscall/js` runtime produces, so peers running either build derive the
//! same phrase from the same arguments.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The global `String()` conversion
    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

/// A host argument classified by JavaScript type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostValue {
    /// A string, used verbatim
    Text(String),
    /// `undefined`
    Undefined,
    /// `null`
    Null,
    /// A boolean, with its `String()` rendering
    Boolean(String),
    /// A number, with its `String()` rendering
    Number(String),
    /// A symbol
    Symbol,
    /// A function
    Function,
    /// Any other object
    Object,
}

impl HostValue {
    /// Classify a JavaScript value
    pub fn from_js(value: &JsValue) -> Self {
        if let Some(text) = value.as_string() {
            HostValue::Text(text)
        } else if value.is_undefined() {
            HostValue::Undefined
        } else if value.is_null() {
            HostValue::Null
        } else if value.as_bool().is_some() {
            HostValue::Boolean(js_string(value))
        } else if value.as_f64().is_some() {
            HostValue::Number(js_string(value))
        } else if value.is_symbol() {
            HostValue::Symbol
        } else if value.is_function() {
            HostValue::Function
        } else {
            HostValue::Object
        }
    }

    /// The text handed to the generator
    pub fn into_text(self) -> String {
        match self {
            HostValue::Text(text) => text,
            HostValue::Undefined => "<undefined>".to_string(),
            HostValue::Null => "<null>".to_string(),
            HostValue::Boolean(rendered) => format!("<boolean: {rendered}>"),
            HostValue::Number(rendered) => format!("<number: {rendered}>"),
            HostValue::Symbol => "<symbol>".to_string(),
            HostValue::Function => "<function>".to_string(),
            HostValue::Object => "<object>".to_string(),
        }
    }
}

/// Text form of one host argument
pub fn host_text(value: &JsValue) -> String {
    HostValue::from_js(value).into_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_verbatim() {
        assert_eq!(HostValue::Text("age1abc".to_string()).into_text(), "age1abc");
        assert_eq!(HostValue::Text(String::new()).into_text(), "");
    }

    #[test]
    fn test_non_strings_are_tagged() {
        assert_eq!(HostValue::Number("42".to_string()).into_text(), "<number: 42>");
        assert_eq!(
            HostValue::Boolean("true".to_string()).into_text(),
            "<boolean: true>"
        );
        assert_eq!(HostValue::Undefined.into_text(), "<undefined>");
        assert_eq!(HostValue::Null.into_text(), "<null>");
        assert_eq!(HostValue::Symbol.into_text(), "<symbol>");
        assert_eq!(HostValue::Function.into_text(), "<function>");
        assert_eq!(HostValue::Object.into_text(), "<object>");
    }
}
