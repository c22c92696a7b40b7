use std::marker::PhantomData;

#[derive(Debug)]
pub struct DefaultValues<'a> {
    // Causes the type to function *as though* it has a `&'a ()` field,
    // despite not *actually* having one.
    _marker: PhantomData<&'a ()>,
}

impl DefaultValues<'static> {
    pub const DIGIT_COUNT: u8 = 4;
    pub const MAX_DIGIT_COUNT: u8 = 8;
    pub const BRIGHTNESS: u8 = 7;
    pub const MAX_BRIGHTNESS: u8 = 7;
    pub const MAX_INTENSITY: u8 = 8;
    pub const PULSE_DELAY_US: u16 = 0;
    pub const DEMO_STEP_DELAY_MS: u64 = 1000;
    pub const DEMO_STEP_DELAY_MS_HOST: u64 = 150;
}
