use derive_more::Display;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{errors::ApiError, schema::course::{CoursePayload, NewCourse}};

/// scheme, dotted host with a 2-5 letter tld, optional port, optional path
static HTTP_LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[a-zA-Z0-9]+([\-.][a-zA-Z0-9]+)*\.[a-zA-Z]{2,5}(:[0-9]{1,5})?(/.*)?$")
        .expect("http link pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Field{
    #[display("title")]
    Title,
    #[display("description")]
    Description,
    #[display("price")]
    Price,
    #[display("image link")]
    ImageLink,
}

/// Checks title, description, price and image link in that order and stops at
/// the first bad one. Accepted values are kept as sent, untrimmed.
pub fn validate_course(payload: &CoursePayload) -> Result<NewCourse, ApiError> {
    let title = non_blank(payload.title.as_deref()).ok_or(ApiError::InvalidField(Field::Title))?;
    let description = non_blank(payload.description.as_deref()).ok_or(ApiError::InvalidField(Field::Description))?;

    let price = payload.price
        .filter(|price| price.is_finite() && *price >= 0.0)
        .ok_or(ApiError::InvalidField(Field::Price))?;

    let image_link = non_blank(payload.image_link.as_deref())
        .filter(|link| is_http_link(link))
        .ok_or(ApiError::InvalidField(Field::ImageLink))?;

    Ok(NewCourse{
        title: title.to_string(),
        description: description.to_string(),
        price,
        image_link: image_link.to_string(),
        published: payload.published.unwrap_or(false),
    })
}

pub fn is_http_link(link: &str) -> bool {
    HTTP_LINK_PATTERN.is_match(link)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
