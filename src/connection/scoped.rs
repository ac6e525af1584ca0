use crate::connection::ClusterConnection;
use std::ops::Deref;

/// Owns a connection that must never outlive the current call. It is closed when the guard is
/// dropped, which covers success, remote failure and the caller abandoning the future.
pub(crate) struct ScopedConnection<T: ClusterConnection> {
    connection: Option<T>,
}

impl<T: ClusterConnection> ScopedConnection<T> {
    pub(crate) fn new(connection: T) -> Self {
        ScopedConnection {
            connection: Some(connection),
        }
    }
}

impl<T: ClusterConnection> Deref for ScopedConnection<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // Only `drop()` takes the connection.
        self.connection.as_ref().expect("ScopedConnection used after close")
    }
}

impl<T: ClusterConnection> Drop for ScopedConnection<T> {
    fn drop(&mut self) {
        if let Some(connection) = self.connection.take() {
            connection.close();
        }
    }
}
