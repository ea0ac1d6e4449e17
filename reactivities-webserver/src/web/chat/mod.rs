use std::fmt;

use rocket::{
    futures::{Sink, SinkExt, Stream, StreamExt},
    get, routes,
    tokio::{select, sync::mpsc::UnboundedReceiver},
    Route, State,
};
use rocket_ws::{Channel, Message, WebSocket};

use super::{guards::Account, sqlite};

mod hub;
mod session;

pub use self::hub::Hub;
use self::session::Session;

pub fn routes() -> Vec<Route> {
    routes![chat]
}

// The account guard has to run first so that
// requests without a valid token are rejected with 401.
#[get("/chat")]
pub fn chat(
    account: Account,
    ws: WebSocket,
    db: &State<sqlite::Connections>,
    hub: &State<Hub>,
) -> Channel<'static> {
    let (session, outbox) =
        Session::new(hub.inner().clone(), db.inner().clone(), account.username());
    ws.channel(move |stream| {
        Box::pin(async move {
            let (outgoing, incoming) = stream.split();
            serve(session, outbox, incoming, outgoing).await
        })
    })
}

/// Relays frames between a client and the hub until either side closes.
async fn serve<I, O, E>(
    session: Session,
    mut outbox: UnboundedReceiver<String>,
    mut incoming: I,
    mut outgoing: O,
) -> Result<(), E>
where
    I: Stream<Item = Result<Message, E>> + Unpin,
    O: Sink<Message, Error = E> + Unpin,
    E: fmt::Display,
{
    loop {
        select! {
            frame = incoming.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    if let Some(reply) = session.on_text(text).await {
                        outgoing.send(Message::Text(reply)).await?;
                    }
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    debug!("Realtime connection failed: {err}");
                    break;
                }
            },
            Some(text) = outbox.recv() => {
                outgoing.send(Message::Text(text)).await?;
            }
        }
    }
    drop(session);
    Ok(())
}
