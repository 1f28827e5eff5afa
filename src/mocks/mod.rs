mod mock_transport;

pub use mock_transport::{MockHttpTransport, MockRequest};
