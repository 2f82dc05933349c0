pub mod model;

// Book is what catalog operations need to know about a record, whichever
// shape it is stored or transferred in.
pub trait Book {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn is_read(&self) -> bool;
}
