use std::sync::Arc;

use nestbuf_codec::{FlatBuffersSerializer, Serializer};
use nestbuf_testkit::data_gen::generate_users;
use rayon::prelude::*;

#[test]
fn test_parallel_encode_decode() {
    let serializer: Arc<dyn Serializer> = Arc::new(FlatBuffersSerializer::new());
    let users = generate_users(500, 1234);

    let buffers = users
        .par_iter()
        .map(|user| serializer.marshal(user))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(buffers.len(), users.len());

    let decoded = buffers
        .par_iter()
        .map(|buf| serializer.unmarshal(buf))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(decoded, users);
}

#[test]
fn test_parallel_batches() {
    let users = generate_users(400, 99);
    let serializer = FlatBuffersSerializer::new();

    let batches = users
        .par_chunks(37)
        .map(|chunk| serializer.marshal_users(chunk).unwrap())
        .collect::<Vec<_>>();

    let decoded = batches
        .par_iter()
        .flat_map_iter(|buf| serializer.unmarshal_users(buf).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(decoded, users);
}
