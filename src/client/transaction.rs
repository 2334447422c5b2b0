use super::{Envelope, Params};
use crate::macros::auto_increment;
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestTransaction {
    pub(crate) client_transaction_id: u32,
    pub(crate) client_id: u32,
}

impl RequestTransaction {
    pub(crate) fn new(client_id: u32) -> Self {
        Self {
            client_transaction_id: auto_increment!(),
            client_id,
        }
    }

    /// Warn if the server echoed back a different transaction id.
    ///
    /// Servers aren't required to echo it at all, so a missing id is fine.
    pub(crate) fn check_echo(self, envelope: &Envelope) {
        match envelope.client_transaction_id {
            Some(received) if received != self.client_transaction_id => {
                tracing::warn!(
                    sent = self.client_transaction_id,
                    received,
                    "ClientTransactionID mismatch",
                );
            }
            _ => {}
        }
    }
}

/// Request parameters followed by the transaction fields, as sent on the wire.
#[derive(Debug)]
pub(crate) struct RequestWithTransaction<'params> {
    pub(crate) transaction: RequestTransaction,
    pub(crate) params: &'params Params,
}

impl Serialize for RequestWithTransaction<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (name, value) in self.params.iter() {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry("ClientID", &self.transaction.client_id)?;
        map.serialize_entry(
            "ClientTransactionID",
            &self.transaction.client_transaction_id,
        )?;
        map.end()
    }
}
