use std::marker::PhantomData;

#[derive(Debug)]
pub struct SegmentDisplayText<'a> {
    // Causes the type to function *as though* it has a `&'a ()` field,
    // despite not *actually* having one.
    _marker: PhantomData<&'a ()>,
}

impl SegmentDisplayText<'static> {
    pub const BOOT: &'static str = "boot";
    pub const HEX: &'static str = "HE";
    pub const DONE: &'static str = "donE";
}
