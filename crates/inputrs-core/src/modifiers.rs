// Inputrs Modifier Mask
// Normalized modifier and button-state bits carried on every event

use bitflags::bitflags;

bitflags! {
    /// Normalized modifier state.
    ///
    /// The native-to-normalized bit translation is the code-mapping
    /// collaborator's job; this type only defines the normalized bits.
    /// Button down-masks share the set so pressed buttons travel with the
    /// keyboard modifiers, matching the downstream pipeline's convention.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u32 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;
        const ALT_GRAPH = 1 << 4;
        const BUTTON1 = 1 << 5;
        const BUTTON2 = 1 << 6;
        const BUTTON3 = 1 << 7;
        const BUTTON4 = 1 << 8;
        const BUTTON5 = 1 << 9;
    }
}
