/*
    This trait is used to provide UI event hookup (i.e selection changed, etc)
 */
pub trait Callback<'b, COM: 'b> {
    fn set_callback(&mut self, c : Box<dyn FnMut(COM) + 'b>);
    fn trigger_callback(&mut self, data: COM);
}
