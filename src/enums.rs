use std::fmt;

/// Server status carried in the header's four-bit response-code field.
///
/// Codes outside the RFC 1035 set are preserved in `Unknown` rather than
/// collapsed, so callers can tell a genuinely unknown code from success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NxDomain,
    NotImp,
    Refused,
    Unknown(u8),
}

impl ResponseCode {
    pub fn from_code(code: u8) -> ResponseCode {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NxDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            code => ResponseCode::Unknown(code),
        }
    }

    pub fn code(&self) -> u8 {
        match *self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NxDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Unknown(code) => code,
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ResponseCode::NoError => fmt.write_str("NOERROR"),
            ResponseCode::FormErr => fmt.write_str("FORMERR"),
            ResponseCode::ServFail => fmt.write_str("SERVFAIL"),
            ResponseCode::NxDomain => fmt.write_str("NXDOMAIN"),
            ResponseCode::NotImp => fmt.write_str("NOTIMP"),
            ResponseCode::Refused => fmt.write_str("REFUSED"),
            ResponseCode::Unknown(code) => write!(fmt, "UNKNOWN({})", code),
        }
    }
}

/// Record type codes.
///
/// Codes this crate does not decode still round-trip through `Unknown`,
/// so an unrecognized record never aborts a decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    A,
    NS,
    CNAME,
    MX,
    AAAA,
    Unknown(u16),
}

impl QueryType {
    pub fn from_code(code: u16) -> QueryType {
        match code {
            1 => QueryType::A,
            2 => QueryType::NS,
            5 => QueryType::CNAME,
            15 => QueryType::MX,
            28 => QueryType::AAAA,
            code => QueryType::Unknown(code),
        }
    }

    pub fn code(&self) -> u16 {
        match *self {
            QueryType::A => 1,
            QueryType::NS => 2,
            QueryType::CNAME => 5,
            QueryType::MX => 15,
            QueryType::AAAA => 28,
            QueryType::Unknown(code) => code,
        }
    }
}
