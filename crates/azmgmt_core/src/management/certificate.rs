//! Service certificate descriptor.

use crate::entity::error::EntityResult;
use crate::entity::record::ServiceEntity;
use crate::entity::schema::{EntitySchema, FieldSpec};
use crate::entity::value::FieldValue;

pub static CERTIFICATE: EntitySchema = EntitySchema {
    kind: "CertificateInstance",
    fields: &[
        FieldSpec::required("certificateUrl"),
        FieldSpec::required("thumbprint"),
        FieldSpec::required("thumbprintAlgorithm"),
        FieldSpec::base64("data"),
    ],
};

/// Builds a certificate record; `data_base64` is decoded into `data`.
///
/// DER payloads are not UTF-8 and end up as `FieldValue::Bytes`.
pub fn certificate(
    certificate_url: impl Into<String>,
    thumbprint: impl Into<String>,
    thumbprint_algorithm: impl Into<String>,
    data_base64: impl Into<String>,
) -> EntityResult<ServiceEntity> {
    ServiceEntity::new(
        &CERTIFICATE,
        vec![
            FieldValue::Str(certificate_url.into()),
            FieldValue::Str(thumbprint.into()),
            FieldValue::Str(thumbprint_algorithm.into()),
            FieldValue::Str(data_base64.into()),
        ],
    )
}
