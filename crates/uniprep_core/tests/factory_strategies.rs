//! Integration tests for the three factory strategies behind one pool.

use std::collections::HashMap;

use uniprep_core::{ComponentPool, GenericPool, ObjectHost, PoolConfig, PrefabPool};

/// Fake scene graph: objects by id, each carrying one component.
#[derive(Default)]
struct Scene {
    next_object: u32,
    objects: HashMap<u32, String>,
    capacity: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Rigidbody {
    object: u32,
    mass: u32,
}

#[derive(Debug, PartialEq, Eq)]
enum SceneError {
    Full,
}

impl ObjectHost for Scene {
    type Component = Rigidbody;
    type Error = SceneError;

    fn spawn_component(&mut self, name: &str) -> Result<Rigidbody, SceneError> {
        if self.capacity.is_some_and(|cap| self.objects.len() >= cap) {
            return Err(SceneError::Full);
        }
        self.next_object += 1;
        self.objects.insert(self.next_object, name.to_owned());
        Ok(Rigidbody {
            object: self.next_object,
            mass: 1,
        })
    }
}

impl Scene {
    fn destroy(&mut self, object: u32) -> bool {
        self.objects.remove(&object).is_some()
    }
}

#[test]
fn test_component_pool_spawns_one_object_per_instance() {
    let mut pool = ComponentPool::from_host(Scene::default());

    let a = pool.try_get().unwrap();
    let b = pool.try_get().unwrap();
    assert_eq!(pool.factory().host().objects.len(), 2);

    pool.free(a);
    let again = pool.try_get().unwrap();
    assert_eq!(again, a);
    assert_eq!(pool.factory().host().objects.len(), 2);

    let name = &pool.factory().host().objects[&pool.instance(b).unwrap().object];
    assert!(name.ends_with("Rigidbody"));
}

#[test]
fn test_component_pool_eviction_hands_back_component() {
    let mut pool = ComponentPool::from_host(Scene::default());
    let id = pool.try_get().unwrap();
    pool.instance_mut(id).unwrap().mass = 9;
    pool.free(id);

    let body = pool.remove(id).unwrap();
    assert_eq!(body.mass, 9);
    assert!(pool.factory_mut().host_mut().destroy(body.object));
    assert!(pool.factory().host().objects.is_empty());
}

#[test]
fn test_component_pool_host_error() {
    let scene = Scene {
        capacity: Some(1),
        ..Scene::default()
    };
    let mut pool = ComponentPool::from_host(scene);

    let _ = pool.try_get().unwrap();
    assert_eq!(pool.try_get(), Err(SceneError::Full));
    assert_eq!(pool.len(), 1);
}

#[test]
fn test_prefab_pool_clones_template() {
    let template = Rigidbody { object: 0, mass: 50 };
    let mut pool = PrefabPool::from_prefab(template.clone());

    let ids: Vec<_> = (0..3).map(|_| pool.get()).collect();
    for id in ids {
        assert_eq!(pool.instance(id), Some(&template));
    }
    assert_eq!(pool.stats().created, 3);
}

#[test]
fn test_generic_pool_from_config() {
    let config = PoolConfig::from_toml_str("name = \"scratch\"\nprewarm = 4").unwrap();
    let mut pool = GenericPool::<Vec<u8>>::with_config(Default::default(), &config).unwrap();

    assert_eq!(pool.name(), "scratch");
    assert_eq!(pool.available_len(), 4);

    let id = pool.get();
    assert_eq!(pool.instance(id), Some(&Vec::new()));
    assert_eq!(pool.stats().recycled, 1);
}
