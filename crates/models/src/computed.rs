use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Computed is a configuration value which the remote service may own.
///
/// A document as written by a user holds either `Unspecified` or `Known`.
/// Plan reconciliation may additionally produce `Unresolved`, which defers
/// the value to the service: it's sent as empty and re-read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Computed<T> {
    /// The user didn't write a value.
    #[default]
    Unspecified,
    /// A concrete value, written by the user or carried from prior state.
    Known(T),
    /// Intentionally undetermined, to be filled in by the service.
    Unresolved,
}

impl<T> Computed<T> {
    pub fn known(&self) -> Option<&T> {
        match self {
            Computed::Known(value) => Some(value),
            _ => None,
        }
    }
    pub fn is_known(&self) -> bool {
        matches!(self, Computed::Known(_))
    }
    pub fn is_unknown(&self) -> bool {
        !self.is_known()
    }
}

impl<T: Serialize> Serialize for Computed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Computed::Known(value) => value.serialize(serializer),
            Computed::Unspecified | Computed::Unresolved => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Computed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Computed::Known(value),
            None => Computed::Unspecified,
        })
    }
}

#[cfg(test)]
mod test {
    use super::Computed;
    use serde_json::json;

    #[test]
    fn test_serde_cases() {
        let known: Computed<Vec<String>> = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(known, Computed::Known(vec!["a".to_string(), "b".to_string()]));

        let null: Computed<Vec<String>> = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(null, Computed::Unspecified);

        assert_eq!(serde_json::to_value(&known).unwrap(), json!(["a", "b"]));
        assert_eq!(
            serde_json::to_value(Computed::<Vec<String>>::Unresolved).unwrap(),
            json!(null)
        );
        assert!(Computed::<u32>::Unresolved.is_unknown());
        assert_eq!(Computed::Known(3).known(), Some(&3));
    }
}
