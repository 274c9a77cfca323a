//! Parameter declarations and the engine-owned parameter store
extern crate hashbrown;
extern crate seed_data;

use self::hashbrown::HashMap;
use self::seed_data::datatypes::{Element, Tensor};

use error::ConfigError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// Declares one named parameter tensor.  A rank-0 shape declares a scalar
pub struct ParamDef {
    /// Name, unique within an engine
    pub name: String,
    /// Dimensions, all positive
    pub shape: Vec<usize>,
}

impl ParamDef {
    /// Returns a new definition
    pub fn new(name: &str, shape: &[usize]) -> Self {
        ParamDef {
            name: name.to_string(),
            shape: shape.to_vec(),
        }
    }

    /// Returns a rank-0 (scalar) definition
    pub fn scalar(name: &str) -> Self {
        ParamDef::new(name, &[])
    }
}

/// Named parameter tensors in declaration order, zero-initialized at
/// construction.  The engine owns the store for its whole lifetime; every
/// other component only reads it
#[derive(Clone, Debug)]
pub struct ParamStore<E> {
    defs: Vec<ParamDef>,
    values: Vec<Tensor<E>>,
    index: HashMap<String, usize>,
}

impl<E: Element> ParamStore<E> {
    /// Builds an all-zero store, validating shapes and name uniqueness
    pub fn from_defs(defs: Vec<ParamDef>) -> Result<Self, ConfigError> {
        let mut index = HashMap::new();
        let mut values = Vec::with_capacity(defs.len());
        for (i, def) in defs.iter().enumerate() {
            if def.shape.iter().any(|d| *d == 0) {
                return Err(ConfigError::ZeroDim {
                    name: def.name.clone(),
                    shape: def.shape.clone(),
                });
            }
            if index.insert(def.name.clone(), i).is_some() {
                return Err(ConfigError::DuplicateParam(def.name.clone()));
            }
            values.push(Tensor::zeros(&def.shape));
        }
        Ok(ParamStore {
            defs: defs,
            values: values,
            index: index,
        })
    }

    /// Number of parameters
    #[inline]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Looks a parameter up by name
    pub fn get(&self, name: &str) -> Option<&Tensor<E>> {
        self.index.get(name).map(|i| &self.values[*i])
    }

    /// The declarations, in order
    #[inline]
    pub fn defs(&self) -> &[ParamDef] {
        &self.defs
    }

    /// The tensors, in declaration order
    #[inline]
    pub fn tensors(&self) -> &[Tensor<E>] {
        &self.values
    }

    /// Mutable access for the engine and candidate construction
    #[inline]
    pub(crate) fn tensors_mut(&mut self) -> &mut [Tensor<E>] {
        &mut self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_init() {
        let store: ParamStore<f32> = ParamStore::from_defs(vec![
            ParamDef::new("weights", &[2, 3]),
            ParamDef::scalar("bias"),
        ])
        .unwrap();

        assert_eq!(store.len(), 2);
        assert!(store
            .get("weights")
            .unwrap()
            .values()
            .iter()
            .all(|v| *v == 0f32));
        assert_eq!(store.get("bias").unwrap().scalar(), 0f32);
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_name() {
        let err = ParamStore::<f32>::from_defs(vec![
            ParamDef::scalar("w"),
            ParamDef::new("w", &[3]),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateParam("w".to_string()));
    }

    #[test]
    fn test_zero_dim() {
        let err =
            ParamStore::<f64>::from_defs(vec![ParamDef::new("w", &[2, 0])]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ZeroDim {
                name: "w".to_string(),
                shape: vec![2, 0],
            }
        );
    }
}
