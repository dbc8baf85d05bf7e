// ABOUTME: Spawned API tasks bridging NotesApi results back to the event loop
// ABOUTME: Each task sends one FetchOutcome over the channel and exits

use notehub_client::{NoteDraft, NotesApi, QueryKey};
use tokio::sync::mpsc;

use crate::types::FetchOutcome;

pub fn spawn_list(
    api: NotesApi,
    key: QueryKey,
    generation: u64,
    tx: mpsc::Sender<FetchOutcome>,
) {
    tokio::spawn(async move {
        let result = api.list(&key.to_params()).await;
        let _ = tx
            .send(FetchOutcome::List {
                key,
                generation,
                result,
            })
            .await;
    });
}

pub fn spawn_create(api: NotesApi, draft: NoteDraft, tx: mpsc::Sender<FetchOutcome>) {
    tokio::spawn(async move {
        let result = api.create(&draft).await;
        let _ = tx.send(FetchOutcome::Created(result)).await;
    });
}

pub fn spawn_delete(api: NotesApi, id: String, tx: mpsc::Sender<FetchOutcome>) {
    tokio::spawn(async move {
        let result = api.delete(&id).await;
        let _ = tx.send(FetchOutcome::Deleted(result)).await;
    });
}
