use crate::Transport;

pub struct TransportFactory;

impl TransportFactory {
    pub fn create<T: Transport>(args: T::Args) -> Result<T, T::ErrorKind> {
        T::new(args)
    }
}
