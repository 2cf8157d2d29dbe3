use actix::Message;

#[derive(Debug, Clone)]
pub struct RefreshPayload;

impl Message for RefreshPayload {
    type Result = ();
}
