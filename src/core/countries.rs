//! Supported countries
//!
//! One [`CountryDescriptor`] per country, sorted by country code. Grammars
//! are format-only: no check digits are verified, and wide length ranges
//! are kept as they are, since tightening them would reject account data
//! sellers have already had accepted.

use super::country_rule::CountryDescriptor;
use super::grammar::FieldGrammar;
use super::masking::MaskPolicy;
use super::routing::{CodeField, RoutingStrategy};

/// SWIFT/BIC: 8 or 11 characters in practice, anything 8 to 11 accepted
const BIC: FieldGrammar = FieldGrammar::upper_alphanumeric(8, 11);

const ECHO_BANK_CODE: RoutingStrategy = RoutingStrategy::Echo(CodeField::BankCode);

const BANK_BRANCH_CONCATENATED: RoutingStrategy = RoutingStrategy::Concatenated {
    first: CodeField::BankCode,
    second: CodeField::BranchCode,
};

const BANK_BRANCH_HYPHENATED: RoutingStrategy = RoutingStrategy::Hyphenated {
    first: CodeField::BankCode,
    second: CodeField::BranchCode,
};

/// IBAN-only country: no bank code, no routing number
const fn iban(country: &'static str, currency: &'static str, pattern: &'static str) -> CountryDescriptor {
    CountryDescriptor::new(country, currency, FieldGrammar::pattern(pattern))
}

/// BIC bank code echoed as the routing number
const fn bic(country: &'static str, currency: &'static str, account_number: FieldGrammar) -> CountryDescriptor {
    CountryDescriptor::new(country, currency, account_number)
        .with_bank_code(BIC)
        .with_routing(ECHO_BANK_CODE)
}

/// National numeric bank code echoed as the routing number
const fn bank_code(
    country: &'static str,
    currency: &'static str,
    bank_code: FieldGrammar,
    account_number: FieldGrammar,
) -> CountryDescriptor {
    CountryDescriptor::new(country, currency, account_number)
        .with_bank_code(bank_code)
        .with_routing(ECHO_BANK_CODE)
}

pub static COUNTRIES: &[CountryDescriptor] = &[
    iban("AD", "eur", r"^AD\d{10}[0-9A-Z]{12}$"),
    iban("AE", "aed", r"^AE\d{21}$"),
    bic("AG", "xcd", FieldGrammar::alphanumeric(1, 32)),
    bic("AL", "all", FieldGrammar::pattern(r"^AL\d{10}[0-9A-Z]{16}$")),
    bic("AM", "amd", FieldGrammar::digits(11, 16)),
    bic("AO", "aoa", FieldGrammar::pattern(r"^AO\d{23}$")),
    CountryDescriptor::new("AR", "ars", FieldGrammar::digits(22, 22)),
    iban("AT", "eur", r"^AT\d{18}$"),
    // BSB number
    bank_code("AU", "aud", FieldGrammar::digits(6, 6), FieldGrammar::digits(5, 9))
        .with_type("AUSTRALIAN")
        .with_mask(MaskPolicy::Bare),
    CountryDescriptor::new("AZ", "azn", FieldGrammar::pattern(r"^AZ\d{2}[A-Z]{4}[0-9A-Z]{20}$"))
        .with_bank_code(FieldGrammar::digits(6, 6))
        .with_branch_code(FieldGrammar::digits(6, 6))
        .with_routing(BANK_BRANCH_HYPHENATED),
    bic("BA", "bam", FieldGrammar::pattern(r"^BA\d{18}$")),
    // 9-digit routing number
    bank_code("BD", "bdt", FieldGrammar::digits(9, 9), FieldGrammar::digits(13, 17)),
    iban("BE", "eur", r"^BE\d{14}$"),
    iban("BG", "bgn", r"^BG\d{2}[A-Z]{4}\d{6}[0-9A-Z]{8}$"),
    bic("BH", "bhd", FieldGrammar::pattern(r"^BH\d{2}[A-Z]{4}[0-9A-Z]{14}$")),
    iban("BJ", "xof", r"^BJ\d{2}[0-9A-Z]{2}\d{22}$"),
    bic("BN", "bnd", FieldGrammar::alphanumeric(1, 13)),
    bank_code("BO", "bob", FieldGrammar::digits(1, 3), FieldGrammar::digits(10, 15)),
    bic("BS", "bsd", FieldGrammar::alphanumeric(1, 10)),
    bic("BT", "btn", FieldGrammar::digits(1, 17)),
    bic("BW", "bwp", FieldGrammar::alphanumeric(1, 16)),
    // Institution number (bank) and transit number (branch); routed as TTTTT-III
    CountryDescriptor::new("CA", "cad", FieldGrammar::digits(5, 12))
        .with_type("CANADIAN")
        .with_bank_code(FieldGrammar::digits(3, 3))
        .with_branch_code(FieldGrammar::digits(5, 5))
        .with_routing(RoutingStrategy::Hyphenated {
            first: CodeField::BranchCode,
            second: CodeField::BankCode,
        })
        .with_mask(MaskPolicy::Bare),
    iban("CH", "chf", r"^CH\d{7}[0-9A-Z]{12}$"),
    iban("CI", "xof", r"^CI\d{2}[0-9A-Z]{2}\d{22}$"),
    bank_code("CL", "clp", FieldGrammar::digits(3, 3), FieldGrammar::digits(5, 25)),
    bank_code("CO", "cop", FieldGrammar::digits(3, 3), FieldGrammar::digits(6, 20)),
    iban("CR", "crc", r"^CR\d{20}$"),
    iban("CY", "eur", r"^CY\d{10}[0-9A-Z]{16}$"),
    iban("CZ", "czk", r"^CZ\d{22}$"),
    iban("DE", "eur", r"^DE\d{20}$"),
    iban("DK", "dkk", r"^DK\d{16}$"),
    bank_code("DO", "dop", FieldGrammar::digits(3, 3), FieldGrammar::digits(1, 28)),
    bic("DZ", "dzd", FieldGrammar::digits(20, 20)),
    bic("EC", "usd", FieldGrammar::digits(5, 18)),
    iban("EE", "eur", r"^EE\d{18}$"),
    bic("EG", "egp", FieldGrammar::pattern(r"^EG\d{27}$")),
    iban("ES", "eur", r"^ES\d{22}$"),
    bic("ET", "etb", FieldGrammar::digits(13, 16)),
    iban("FI", "eur", r"^FI\d{16}$"),
    iban("FR", "eur", r"^FR\d{12}[0-9A-Z]{11}\d{2}$"),
    bic("GA", "xaf", FieldGrammar::digits(23, 23)),
    // Sort code, with or without hyphens; echoed exactly as entered
    bank_code(
        "GB",
        "gbp",
        FieldGrammar::pattern(r"^\d{2}-?\d{2}-?\d{2}$"),
        FieldGrammar::digits(6, 8),
    )
    .with_type("UK")
    .with_mask(MaskPolicy::Bare),
    bank_code("GH", "ghs", FieldGrammar::digits(6, 6), FieldGrammar::digits(8, 20)),
    iban("GI", "gbp", r"^GI\d{2}[A-Z]{4}[0-9A-Z]{15}$"),
    iban("GR", "eur", r"^GR\d{9}[0-9A-Z]{16}$"),
    bic("GT", "gtq", FieldGrammar::pattern(r"^GT\d{2}[0-9A-Z]{24}$")),
    bic("GY", "gyd", FieldGrammar::alphanumeric(1, 32)),
    // Clearing code and branch code
    CountryDescriptor::new("HK", "hkd", FieldGrammar::digits(6, 12))
        .with_bank_code(FieldGrammar::digits(3, 3))
        .with_branch_code(FieldGrammar::digits(3, 3))
        .with_routing(BANK_BRANCH_HYPHENATED),
    iban("HR", "eur", r"^HR\d{19}$"),
    iban("HU", "huf", r"^HU\d{26}$"),
    bank_code("ID", "idr", FieldGrammar::digits(3, 4), FieldGrammar::digits(1, 35)),
    iban("IE", "eur", r"^IE\d{2}[A-Z]{4}\d{14}$"),
    bic("IL", "ils", FieldGrammar::pattern(r"^IL\d{21}$")),
    // IFSC
    bank_code(
        "IN",
        "inr",
        FieldGrammar::pattern(r"^[A-Z]{4}0[0-9A-Z]{6}$"),
        FieldGrammar::digits(9, 18),
    ),
    iban("IS", "isk", r"^IS\d{24}$"),
    iban("IT", "eur", r"^IT\d{2}[A-Z]\d{10}[0-9A-Z]{12}$"),
    CountryDescriptor::new("JM", "jmd", FieldGrammar::digits(1, 18))
        .with_bank_code(FieldGrammar::digits(3, 3))
        .with_branch_code(FieldGrammar::digits(5, 5))
        .with_routing(BANK_BRANCH_HYPHENATED),
    bic("JO", "jod", FieldGrammar::pattern(r"^JO\d{2}[A-Z]{4}\d{4}[0-9A-Z]{18}$")),
    CountryDescriptor::new("JP", "jpy", FieldGrammar::digits(4, 8))
        .with_bank_code(FieldGrammar::digits(4, 4))
        .with_branch_code(FieldGrammar::digits(3, 3))
        .with_routing(BANK_BRANCH_CONCATENATED),
    bic("KE", "kes", FieldGrammar::any_non_empty()),
    bic("KH", "khr", FieldGrammar::digits(5, 15)),
    bic("KR", "krw", FieldGrammar::digits(11, 14)),
    bic("KW", "kwd", FieldGrammar::pattern(r"^KW\d{2}[A-Z]{4}[0-9A-Z]{22}$")),
    bic("KZ", "kzt", FieldGrammar::pattern(r"^KZ\d{5}[0-9A-Z]{13}$")),
    bic("LA", "lak", FieldGrammar::digits(1, 18)),
    bic("LC", "xcd", FieldGrammar::alphanumeric(1, 32)),
    iban("LI", "chf", r"^LI\d{7}[0-9A-Z]{12}$"),
    CountryDescriptor::new("LK", "lkr", FieldGrammar::digits(10, 18))
        .with_bank_code(FieldGrammar::digits(4, 4))
        .with_branch_code(FieldGrammar::digits(3, 3))
        .with_routing(BANK_BRANCH_CONCATENATED),
    iban("LT", "eur", r"^LT\d{18}$"),
    iban("LU", "eur", r"^LU\d{5}[0-9A-Z]{13}$"),
    iban("LV", "eur", r"^LV\d{2}[A-Z]{4}[0-9A-Z]{13}$"),
    bic("MA", "mad", FieldGrammar::digits(24, 24)),
    iban("MC", "eur", r"^MC\d{12}[0-9A-Z]{11}\d{2}$"),
    bic("MD", "mdl", FieldGrammar::pattern(r"^MD\d{2}[0-9A-Z]{20}$")),
    bic("MG", "mga", FieldGrammar::pattern(r"^MG\d{25}$")),
    bic("MK", "mkd", FieldGrammar::pattern(r"^MK\d{5}[0-9A-Z]{10}\d{2}$")),
    bic("MN", "mnt", FieldGrammar::any_non_empty()),
    bic("MO", "mop", FieldGrammar::alphanumeric(1, 19)),
    iban("MT", "eur", r"^MT\d{2}[A-Z]{4}\d{5}[0-9A-Z]{18}$"),
    bic("MU", "mur", FieldGrammar::pattern(r"^MU\d{2}[A-Z]{4}\d{19}[A-Z]{3}$")),
    // CLABE
    CountryDescriptor::new("MX", "mxn", FieldGrammar::digits(18, 18)),
    bic("MY", "myr", FieldGrammar::digits(5, 17)),
    bic("MZ", "mzn", FieldGrammar::digits(21, 21)),
    bic("NA", "nad", FieldGrammar::digits(8, 13)),
    // Payouts settle through a single central-bank correspondent
    iban("NE", "xof", r"^NE\d{2}[0-9A-Z]{2}\d{22}$").with_routing(RoutingStrategy::Fixed("BCAONENI")),
    bic("NG", "ngn", FieldGrammar::digits(10, 10)),
    iban("NL", "eur", r"^NL\d{2}[A-Z]{4}\d{10}$"),
    iban("NO", "nok", r"^NO\d{13}$"),
    CountryDescriptor::new("NZ", "nzd", FieldGrammar::digits(15, 16)),
    bic("OM", "omr", FieldGrammar::digits(6, 16)),
    bic("PA", "usd", FieldGrammar::alphanumeric(1, 18)),
    // CCI
    CountryDescriptor::new("PE", "pen", FieldGrammar::digits(20, 20)),
    bic("PH", "php", FieldGrammar::alphanumeric(1, 17)),
    bic("PK", "pkr", FieldGrammar::pattern(r"^PK\d{2}[A-Z]{4}[0-9A-Z]{16}$")),
    iban("PL", "pln", r"^PL\d{26}$"),
    iban("PT", "eur", r"^PT\d{23}$"),
    bank_code("PY", "pyg", FieldGrammar::digits(1, 2), FieldGrammar::digits(1, 16)),
    bic("QA", "qar", FieldGrammar::pattern(r"^QA\d{2}[A-Z]{4}[0-9A-Z]{21}$")),
    iban("RO", "ron", r"^RO\d{2}[A-Z]{4}[0-9A-Z]{16}$"),
    bic("RS", "rsd", FieldGrammar::pattern(r"^RS\d{20}$")),
    bic("RW", "rwf", FieldGrammar::digits(1, 15)),
    bic("SA", "sar", FieldGrammar::pattern(r"^SA\d{4}[0-9A-Z]{18}$")),
    iban("SE", "sek", r"^SE\d{22}$"),
    CountryDescriptor::new("SG", "sgd", FieldGrammar::digits(6, 12))
        .with_type("SINGAPOREAN")
        .with_bank_code(FieldGrammar::digits(4, 4))
        .with_branch_code(FieldGrammar::digits(3, 3))
        .with_routing(BANK_BRANCH_HYPHENATED),
    iban("SI", "eur", r"^SI\d{17}$"),
    iban("SK", "eur", r"^SK\d{22}$"),
    iban("SN", "xof", r"^SN\d{2}[0-9A-Z]{2}\d{22}$"),
    bic("SV", "usd", FieldGrammar::pattern(r"^SV\d{2}[A-Z]{4}\d{20}$")),
    bank_code("TH", "thb", FieldGrammar::digits(3, 3), FieldGrammar::digits(6, 15)),
    iban("TN", "tnd", r"^TN\d{22}$"),
    bic("TR", "try", FieldGrammar::pattern(r"^TR\d{8}[0-9A-Z]{16}$")),
    CountryDescriptor::new("TT", "ttd", FieldGrammar::digits(1, 17))
        .with_bank_code(FieldGrammar::digits(3, 3))
        .with_branch_code(FieldGrammar::digits(5, 5))
        .with_routing(BANK_BRANCH_CONCATENATED),
    bic("TW", "twd", FieldGrammar::digits(10, 16)),
    bic("TZ", "tzs", FieldGrammar::alphanumeric(10, 14)),
    // ABA routing transit number
    bank_code(
        "US",
        "usd",
        FieldGrammar::digits(9, 9),
        FieldGrammar::digits(1, 17),
    )
    .with_type("ACH")
    .with_mask(MaskPolicy::Bare),
    bank_code("UY", "uyu", FieldGrammar::digits(3, 3), FieldGrammar::digits(1, 12)),
    // Branch code is collected but optional; routing uses the BIC alone
    bic("UZ", "uzs", FieldGrammar::digits(5, 20)).with_branch_code(FieldGrammar::digits(5, 5).optional()),
    bank_code("VN", "vnd", FieldGrammar::digits(8, 8), FieldGrammar::digits(1, 17)),
    bic("ZA", "zar", FieldGrammar::digits(6, 16)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countries_sorted_and_unique() {
        for pair in COUNTRIES.windows(2) {
            assert!(
                pair[0].country < pair[1].country,
                "{} must sort before {}",
                pair[0].country,
                pair[1].country
            );
        }
    }

    #[test]
    fn test_country_codes_are_alpha2() {
        for descriptor in COUNTRIES {
            assert_eq!(descriptor.country.len(), 2, "{}", descriptor.country);
            assert!(descriptor.country.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_currencies_are_lower_case_iso4217() {
        for descriptor in COUNTRIES {
            let currency = descriptor.currency.as_str();
            assert_eq!(currency.len(), 3, "{}", descriptor.country);
            assert!(
                currency.chars().all(|c| c.is_ascii_lowercase()),
                "{} has currency {}",
                descriptor.country,
                currency
            );
        }
    }

    #[test]
    fn test_iban_patterns_start_with_country_code() {
        use crate::core::grammar::Shape;

        for descriptor in COUNTRIES {
            if let Shape::Pattern(pattern) = descriptor.account_number.shape {
                let expected = format!("^{}", descriptor.country);
                assert!(
                    pattern.starts_with(&expected),
                    "{} pattern {}",
                    descriptor.country,
                    pattern
                );
            }
        }
    }
}
