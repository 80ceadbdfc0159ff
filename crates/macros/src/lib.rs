// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Sigma calendar project*
//!
//! This crate contains the Sigma calendar procedural macros
//!

extern crate proc_macro;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// The formats accepted by `datetime!`, tried in order
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// The format accepted by `date!`
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse the literal as a date-time (a plain date means midnight)
fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// A compile error pointing at `span`
fn compile_error(span: Span, message: &str) -> TokenStream2 {
    syn::Error::new(span, message).to_compile_error()
}

fn expand_datetime(lit: &LitStr) -> TokenStream2 {
    let Some(datetime) = parse_datetime(&lit.value()) else {
        return compile_error(
            lit.span(),
            "Expected a date-time such as \"2024-01-15T14:00:00\" or \"2024-01-15\"",
        );
    };

    let (year, month, day) = (datetime.year(), datetime.month(), datetime.day());
    let (hour, minute, second) = (datetime.hour(), datetime.minute(), datetime.second());
    quote! {
        ::chrono::NaiveDate::from_ymd_opt(#year, #month, #day)
            .unwrap()
            .and_hms_opt(#hour, #minute, #second)
            .unwrap()
    }
}

fn expand_date(lit: &LitStr) -> TokenStream2 {
    let date = match NaiveDate::parse_from_str(&lit.value(), DATE_FORMAT) {
        Ok(date) => date,
        Err(_) => return compile_error(lit.span(), "Expected a date such as \"2024-01-15\""),
    };

    let (year, month, day) = (date.year(), date.month(), date.day());
    quote! {
        ::chrono::NaiveDate::from_ymd_opt(#year, #month, #day).unwrap()
    }
}

/// Create a `chrono::NaiveDateTime`, using `datetime!("2024-01-15T14:00:00")`,
/// with compile time checking of the value.
#[proc_macro]
pub fn datetime(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);
    expand_datetime(&lit).into()
}

/// Create a `chrono::NaiveDate`, using `date!("2024-01-15")`, with compile
/// time checking of the value.
#[proc_macro]
pub fn date(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);
    expand_date(&lit).into()
}
