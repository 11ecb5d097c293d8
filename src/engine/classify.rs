//! Response Assembler
//!
//! Composes normalizer output, predicate results, digit-sum and the fact
//! lookup into one immutable [`Classification`]. No validation happens here;
//! assembly is total for any well-formed [`NormalizedNumber`].

use serde::Serialize;

use crate::engine::normalize::NormalizedNumber;
use crate::engine::predicates::{digit_sum, is_armstrong, is_prime, is_perfect, parity};
use crate::facts::{FactLookup, INTEGER_FACTS_ONLY};

/// The classification record, serialized verbatim as the 200 response body.
/// Built once per request and never mutated.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Classification {
    pub number: f64,
    pub is_prime: bool,
    pub is_perfect: bool,
    /// Always exactly one of "odd"/"even", preceded by "armstrong" when the
    /// magnitude has the Armstrong property.
    pub properties: Vec<String>,
    pub digit_sum: u32,
    /// Always present: real fact text, a degraded lookup message, or the
    /// integers-only notice for fractional input.
    pub fun_fact: String,
}

/// Run the predicate suite over a normalized number and assemble the result.
///
/// Prime and perfect require a non-negative integral subject; Armstrong and
/// digit-sum require an integral one (sign ignored, per the magnitude);
/// parity always applies. Fractional input skips the provider entirely.
pub async fn classify(num: &NormalizedNumber, facts: &dyn FactLookup) -> Classification {
    let magnitude = num.magnitude();

    let mut properties = Vec::with_capacity(2);
    if num.is_integral() && is_armstrong(magnitude) {
        properties.push("armstrong".to_string());
    }
    properties.push(parity(magnitude).as_str().to_string());

    let fun_fact = if num.is_integral() {
        facts.lookup(magnitude).await
    } else {
        INTEGER_FACTS_ONLY.to_string()
    };

    Classification {
        number: num.value(),
        is_prime: num.is_predicate_subject() && is_prime(magnitude),
        is_perfect: num.is_predicate_subject() && is_perfect(magnitude),
        properties,
        digit_sum: if num.is_integral() { digit_sum(magnitude) } else { 0 },
        fun_fact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::normalize::{normalize, ValidationPolicy};
    use async_trait::async_trait;

    /// Deterministic stand-in for the Numbers API.
    struct StaticFacts(&'static str);

    #[async_trait]
    impl FactLookup for StaticFacts {
        async fn lookup(&self, _n: u64) -> String {
            self.0.to_string()
        }
    }

    async fn classify_raw(raw: &str) -> Classification {
        let num = normalize(Some(raw), ValidationPolicy::Lenient).unwrap();
        classify(&num, &StaticFacts("a fact")).await
    }

    #[tokio::test]
    async fn test_perfect_even_28() {
        let result = classify_raw("28").await;
        assert!(result.is_perfect);
        assert!(!result.is_prime);
        assert_eq!(result.properties, vec!["even"]);
        assert_eq!(result.digit_sum, 10);
        assert_eq!(result.fun_fact, "a fact");
    }

    #[tokio::test]
    async fn test_armstrong_odd_153() {
        let result = classify_raw("153").await;
        assert!(!result.is_prime);
        assert!(!result.is_perfect);
        assert_eq!(result.properties, vec!["armstrong", "odd"]);
        assert_eq!(result.digit_sum, 9);
    }

    #[tokio::test]
    async fn test_prime_7() {
        let result = classify_raw("7").await;
        assert!(result.is_prime);
        assert!(!result.is_perfect);
        assert_eq!(result.properties, vec!["armstrong", "odd"]);
        assert_eq!(result.digit_sum, 7);
    }

    #[tokio::test]
    async fn test_negative_never_prime_or_perfect() {
        let result = classify_raw("-153").await;
        assert!(!result.is_prime);
        assert!(!result.is_perfect);
        // Armstrong and parity run on the magnitude.
        assert_eq!(result.properties, vec!["armstrong", "odd"]);
        assert_eq!(result.digit_sum, 9);
        assert_eq!(result.number, -153.0);
    }

    #[tokio::test]
    async fn test_fractional_skips_provider() {
        let result = classify_raw("3.5").await;
        assert!(!result.is_prime);
        assert!(!result.is_perfect);
        assert_eq!(result.properties, vec!["odd"]);
        assert_eq!(result.digit_sum, 0);
        assert_eq!(result.fun_fact, INTEGER_FACTS_ONLY);
    }

    #[tokio::test]
    async fn test_zero_fraction_float_is_integral() {
        let result = classify_raw("496.0").await;
        assert!(result.is_perfect);
        assert_eq!(result.fun_fact, "a fact");
        assert_eq!(result.digit_sum, 19);
    }

    #[tokio::test]
    async fn test_zero_and_one_neither_prime_nor_perfect() {
        for raw in ["0", "1"] {
            let result = classify_raw(raw).await;
            assert!(!result.is_prime, "n={}", raw);
            assert!(!result.is_perfect, "n={}", raw);
            // Single-digit numbers trivially have the Armstrong property.
            assert_eq!(result.properties[0], "armstrong");
        }
    }
}
