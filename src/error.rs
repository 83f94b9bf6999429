use std::error::Error;

use rusoto_core::proto::xml::error::{XmlError, XmlErrorDeserializer};
use rusoto_core::proto::xml::util::{find_start_element, start_element, XmlResponse};
use rusoto_core::RusotoError;
use rusoto_ec2::RebootInstancesError;
use rusoto_sns::PublishError;
use std::fmt;
use std::fmt::{Display, Formatter};
use xml::reader::EventReader;

// Elements enclosing <Error> in each service's error envelope.
const EC2_ERROR_PATH: [&str; 2] = ["Response", "Errors"];
const SNS_ERROR_PATH: [&str; 1] = ["ErrorResponse"];

#[derive(Debug, PartialEq)]
pub enum ResponderError {
    MissingConfig(&'static str),
    RebootError(RusotoError<RebootInstancesError>),
    PublishError(RusotoError<PublishError>),
}

impl Display for ResponderError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            ResponderError::MissingConfig(name) => {
                write!(f, "Environment variable {} must be configured", name)
            }
            ResponderError::RebootError(ref error) => {
                describe_aws_error(error, "RebootInstances", &EC2_ERROR_PATH, f)
            }
            ResponderError::PublishError(ref error) => {
                describe_aws_error(error, "Publish", &SNS_ERROR_PATH, f)
            }
        }
    }
}

/// Errors rusoto could not map to a service variant keep the raw response,
/// so their code and message are read back out of the XML body.
fn describe_aws_error<E: Error + 'static>(
    error: &RusotoError<E>,
    operation: &str,
    path: &[&str],
    f: &mut Formatter,
) -> fmt::Result {
    match error {
        RusotoError::Unknown(response) => match parse_xml_error(response.body.as_ref(), path) {
            Some(parsed) => write!(
                f,
                "An error occurred ({}) when calling the {} operation: {}",
                parsed.code, operation, parsed.message
            ),
            None => std::fmt::Display::fmt(error, f),
        },
        _ => std::fmt::Display::fmt(error, f),
    }
}

fn parse_xml_error(body: &[u8], path: &[&str]) -> Option<XmlError> {
    let reader = EventReader::new(body);
    let mut stack = XmlResponse::new(reader.into_iter().peekable());
    find_start_element(&mut stack);
    for element in path {
        start_element(element, &mut stack).ok()?;
    }
    XmlErrorDeserializer::deserialize("Error", &mut stack)
        .ok()
        .filter(|parsed| !parsed.code.is_empty())
}

impl Error for ResponderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ResponderError::RebootError(ref error) => Some(error),
            ResponderError::PublishError(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<RusotoError<RebootInstancesError>> for ResponderError {
    fn from(e: RusotoError<RebootInstancesError>) -> ResponderError {
        ResponderError::RebootError(e)
    }
}

impl From<RusotoError<PublishError>> for ResponderError {
    fn from(e: RusotoError<PublishError>) -> ResponderError {
        ResponderError::PublishError(e)
    }
}
