/// `Validatable` is checked before a command is dispatched to the API.
pub trait Validatable<E> {
    fn validate(&self) -> Result<(), E>;
}
