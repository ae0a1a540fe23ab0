use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use strawberry_core::{InMemoryResourceEngine, Location, Resource, ResourceEngine, ResourceService};

const WRITERS: usize = 8;
const PER_WRITER: usize = 50;

fn payload(writer: usize, n: usize) -> Resource {
    Resource::new(
        format!("type-{writer}"),
        format!("writer {writer} item {n}"),
        Location::new(writer as f32, n as f32),
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    )
}

fn is_whole(resource: &Resource) -> bool {
    let Some(writer) = resource
        .kind
        .strip_prefix("type-")
        .and_then(|raw| raw.parse::<usize>().ok())
    else {
        return false;
    };
    let n = resource.location.lon as usize;
    resource.location.lat == writer as f32
        && resource.description == format!("writer {writer} item {n}")
        && !resource.id.is_empty()
}

#[test]
fn concurrent_creates_are_not_lost() {
    let service = Arc::new(ResourceService::new(InMemoryResourceEngine::new()));

    let handles: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for n in 0..PER_WRITER {
                    let input = payload(writer, n);
                    let id = service.create_resource(input.clone()).unwrap();
                    let stored = service.get_resource(&id).unwrap();
                    assert_eq!(stored.id, id);
                    assert_eq!(Resource { id: String::new(), ..stored }, input);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(service.engine().len(), WRITERS * PER_WRITER);
    assert_eq!(
        service.list_resources(0).unwrap().len(),
        WRITERS * PER_WRITER
    );
}

#[test]
fn list_never_observes_partial_writes() {
    let engine: Arc<dyn ResourceEngine> = Arc::new(InMemoryResourceEngine::new());
    let service = Arc::new(ResourceService::new(Arc::clone(&engine)));
    let done = Arc::new(AtomicBool::new(false));

    let writers: Vec<_> = (0..4)
        .map(|writer| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for n in 0..PER_WRITER {
                    let id = service.create_resource(payload(writer, n)).unwrap();
                    if n % 2 == 0 {
                        service.delete_resource(&id).unwrap();
                    }
                }
            })
        })
        .collect();

    let reader = {
        let engine = Arc::clone(&engine);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut snapshots = 0;
            while !done.load(Ordering::Acquire) || snapshots == 0 {
                let snapshot = engine.list_resources(0).unwrap();
                assert!(snapshot.iter().all(is_whole));
                snapshots += 1;
            }
        })
    };

    for handle in writers {
        handle.join().unwrap();
    }
    done.store(true, Ordering::Release);
    reader.join().unwrap();

    let remaining = engine.list_resources(0).unwrap();
    assert_eq!(remaining.len(), 4 * PER_WRITER / 2);
    assert!(remaining.iter().all(is_whole));
}
