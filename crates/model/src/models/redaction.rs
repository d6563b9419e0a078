//! Content redaction of personally identifiable information.

use crate::shape::{shape, string_enum};

string_enum! {
    /// Category of content to redact.
    pub enum RedactionType {
        Pii => "PII",
    }
}

string_enum! {
    /// Which transcripts are produced when redaction is enabled.
    pub enum RedactionOutput {
        Redacted => "redacted",
        RedactedAndUnredacted => "redacted_and_unredacted",
    }
}

string_enum! {
    /// Kind of PII to redact. `All` redacts every kind.
    pub enum PiiEntityType {
        BankAccountNumber => "BANK_ACCOUNT_NUMBER",
        BankRouting => "BANK_ROUTING",
        CreditDebitNumber => "CREDIT_DEBIT_NUMBER",
        CreditDebitCvv => "CREDIT_DEBIT_CVV",
        CreditDebitExpiry => "CREDIT_DEBIT_EXPIRY",
        Pin => "PIN",
        Email => "EMAIL",
        Address => "ADDRESS",
        Name => "NAME",
        Phone => "PHONE",
        Ssn => "SSN",
        All => "ALL",
    }
}

shape! {
    /// Redaction configuration for a job.
    ///
    /// `RedactionType` and `RedactionOutput` are both required when redaction
    /// is requested.
    pub struct ContentRedaction {
        #[validate(required, custom(function = "crate::validation::known_value"))]
        redaction_type / with_redaction_type: RedactionType => "RedactionType",
        #[validate(required, custom(function = "crate::validation::known_value"))]
        redaction_output / with_redaction_output: RedactionOutput => "RedactionOutput",
        #[validate(length(max = 11), custom(function = "crate::validation::known_value"))]
        pii_entity_types / with_pii_entity_types: Vec<PiiEntityType> => "PiiEntityTypes",
    }
}

impl ContentRedaction {
    /// PII redaction producing the given outputs, all entity types.
    pub fn pii(output: RedactionOutput) -> Self {
        Self::new()
            .with_redaction_type(RedactionType::Pii)
            .with_redaction_output(output)
    }
}
