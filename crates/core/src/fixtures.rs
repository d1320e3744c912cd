//! Fixtures
//!
//! Coupon sets described in YAML, used for seeding stores and in tests.
//!
//! ```yaml
//! coupons:
//!   - type: cart-wise
//!     details:
//!       threshold: 100
//!       discount: 10
//! ```

use std::{fs, io, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::coupons::{Coupon, CouponId, DiscountRule, RuleError};

/// Errors raised while loading a fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Fixture file could not be read.
    #[error("failed to read fixture file")]
    Io(#[from] io::Error),

    /// Fixture is not valid YAML or does not match the expected shape.
    #[error("failed to parse fixture")]
    Yaml(#[from] serde_norway::Error),

    /// A rule in the fixture is structurally invalid.
    #[error("coupon {index} is invalid")]
    InvalidRule {
        /// Position of the rule in the fixture
        index: usize,

        /// Validation failure
        #[source]
        source: RuleError,
    },
}

/// Wrapper for coupons in YAML
#[derive(Debug, Deserialize)]
pub struct CouponsFixture {
    /// Rules in fixture order
    pub coupons: Vec<DiscountRule>,
}

impl CouponsFixture {
    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any rule is invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Load a fixture from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed or if any rule is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: Self = serde_norway::from_str(yaml)?;

        for (index, rule) in fixture.coupons.iter().enumerate() {
            rule.validate()
                .map_err(|source| FixtureError::InvalidRule { index, source })?;
        }

        Ok(fixture)
    }

    /// Number the rules `1..` in fixture order.
    pub fn into_coupons(self) -> Vec<Coupon> {
        self.coupons
            .into_iter()
            .zip(1..)
            .map(|(rule, id)| Coupon::new(CouponId::new(id), rule))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use testresult::TestResult;

    use crate::coupons::RuleKind;

    use super::*;

    const YAML: &str = r"
coupons:
  - type: cart-wise
    details:
      threshold: 100
      discount: 10
  - type: bxgy
    details:
      buy_products:
        - product_id: 1
          quantity: 2
      get_products:
        - product_id: 2
          quantity: 1
      repetition_limit: 2
";

    #[test]
    fn parses_rules_in_order() -> TestResult {
        let coupons = CouponsFixture::from_yaml(YAML)?.into_coupons();

        let summary: Vec<(u64, RuleKind)> = coupons
            .iter()
            .map(|coupon| (coupon.id.get(), coupon.rule.kind()))
            .collect();

        assert_eq!(summary, vec![(1, RuleKind::CartWise), (2, RuleKind::BxGy)]);

        Ok(())
    }

    #[test]
    fn loads_from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(YAML.as_bytes())?;

        let fixture = CouponsFixture::from_path(file.path())?;

        assert_eq!(fixture.coupons.len(), 2);

        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = CouponsFixture::from_path("/definitely/not/a/fixture.yml");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn invalid_rule_reports_its_position() {
        let yaml = r"
coupons:
  - type: cart-wise
    details:
      threshold: 0
      discount: 10
  - type: product-wise
    details:
      product_id: 1
      discount: 150
";

        let result = CouponsFixture::from_yaml(yaml);

        assert!(matches!(
            result,
            Err(FixtureError::InvalidRule {
                index: 1,
                source: RuleError::InvalidDiscount(150)
            })
        ));
    }

    #[test]
    fn malformed_yaml_is_yaml_error() {
        let result = CouponsFixture::from_yaml("coupons: [");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }
}
