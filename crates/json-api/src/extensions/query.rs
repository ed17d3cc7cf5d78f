//! Query string parsing helpers.

use std::{fmt::Display, str::FromStr};

use salvo::prelude::{Request, StatusError};

use sandbox_app::domain::pagination::Page;

use crate::extensions::*;

pub(crate) trait QueryExt {
    /// Parse an optional query parameter, rejecting malformed values with 400.
    ///
    /// A blank value counts as absent.
    fn parse_query<T>(&self, key: &str) -> Result<Option<T>, StatusError>
    where
        T: FromStr,
        T::Err: Display;

    /// The `page` and `size` parameters, defaulting to the first page of ten.
    fn parse_page(&self) -> Result<Page, StatusError>;
}

impl QueryExt for Request {
    fn parse_query<T>(&self, key: &str) -> Result<Option<T>, StatusError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.query::<String>(key)
            .filter(|value| !value.trim().is_empty())
            .map(|value| value.trim().parse::<T>())
            .transpose()
            .or_400(&format!("could not parse \"{key}\" query parameter"))
    }

    fn parse_page(&self) -> Result<Page, StatusError> {
        let defaults = Page::default();

        Ok(Page::new(
            self.parse_query("page")?.unwrap_or(defaults.page),
            self.parse_query("size")?.unwrap_or(defaults.size),
        ))
    }
}
