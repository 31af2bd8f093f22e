use super::*;
use crate::params::model::RenderParameters;
use crate::params::edit::{add_layer, delete_layer};

fn canvas(w: u32) -> Canvas {
    Canvas::new(w, 40).unwrap()
}

fn ids(params: &RenderParameters) -> BTreeSet<LayerId> {
    params.layers.iter().map(|l| l.id.clone()).collect()
}

#[test]
fn create_allocates_one_buffer_per_layer() {
    let p = add_layer(&add_layer(&RenderParameters::default()));
    let mut m = LayerBufferManager::new();
    m.create_buffers(&p.layers, canvas(50));
    assert_eq!(m.ids(), ids(&p));
    assert_eq!(m.stats().live, 3);
    let buf = m.get_buffer(&p.layers[1].id).unwrap();
    assert_eq!(buf.canvas(), canvas(50));
    assert!(m.get_buffer(&LayerId::new("ghost")).is_none());
}

#[test]
fn sync_releases_removed_ids_without_reallocating() {
    let p = add_layer(&RenderParameters::default());
    let mut m = LayerBufferManager::new();
    assert!(m.sync(&p.layers, canvas(50)));
    let allocated = m.stats().allocated;

    let q = delete_layer(&p, 0).unwrap();
    assert!(!m.sync(&q.layers, canvas(50)));
    assert_eq!(m.ids(), ids(&q));
    assert_eq!(m.stats().allocated, allocated);
    assert_eq!(m.stats().released, 1);
}

#[test]
fn new_id_or_resize_recreates_everything() {
    let p = RenderParameters::default();
    let mut m = LayerBufferManager::new();
    m.sync(&p.layers, canvas(50));

    let q = add_layer(&p);
    assert!(m.sync(&q.layers, canvas(50)));
    assert_eq!(m.stats().allocated, 3);
    assert_eq!(m.ids(), ids(&q));

    assert!(m.sync(&q.layers, canvas(60)));
    assert_eq!(m.stats().allocated, 5);
    assert_eq!(m.canvas(), Some(canvas(60)));
    assert!(!m.sync(&q.layers, canvas(60)));
}

#[test]
fn release_all_empties() {
    let p = RenderParameters::default();
    let mut m = LayerBufferManager::new();
    m.create_buffers(&p.layers, canvas(20));
    m.release_all();
    assert!(m.ids().is_empty());
    assert_eq!(m.stats().live, 0);
    assert_eq!(m.canvas(), None);
}
