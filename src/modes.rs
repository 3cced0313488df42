//! Vocabularies that only exist in the current SDK header: device models and the
//! ToF sensor work modes selected through [`Control::Mode`](crate::Control::Mode) and
//! [`Control::FrameMode`](crate::Control::FrameMode).

use arducam_tof_sys as sys;

use crate::common::c_enum;

c_enum! {
    /// Sensor model of the connected module.
    pub enum DeviceType: sys::ArducamDeviceType as "device type" {
        Vga = "vga" => sys::ArducamDeviceType_ARDUCAM_DEVICE_VGA,
        Hqvga = "hqvga" => sys::ArducamDeviceType_ARDUCAM_DEVICE_HQVGA,
    }
}

c_enum! {
    /// Modulation scheme of the ToF sensor.
    pub enum TofWorkMode: sys::ArducamTofWorkMode as "work mode" {
        SingleFreq = "single_freq" => sys::ArducamTofWorkMode_ARDUCAM_MODE_SINGLE_FREQ,
        DoubleFreq = "double_freq" => sys::ArducamTofWorkMode_ARDUCAM_MODE_DOUBLE_FREQ,
        TripleFreq = "triple_freq" => sys::ArducamTofWorkMode_ARDUCAM_MODE_TRIPLE_FREQ,
        QuadFreq = "quad_freq" => sys::ArducamTofWorkMode_ARDUCAM_MODE_QUAD_FREQ,
        Distance = "distance" => sys::ArducamTofWorkMode_ARDUCAM_MODE_DISTANCE,
        Hdr = "hdr" => sys::ArducamTofWorkMode_ARDUCAM_MODE_HDR,
        AutoExposure = "ae" => sys::ArducamTofWorkMode_ARDUCAM_MODE_AE,
        BgOutdoor = "bg_outdoor" => sys::ArducamTofWorkMode_ARDUCAM_MODE_BG_OUTDOOR,
        GrayOnly = "gray_only" => sys::ArducamTofWorkMode_ARDUCAM_MODE_GRAY_ONLY,
        Custom1 = "custom1" => sys::ArducamTofWorkMode_ARDUCAM_MODE_CUSTOM1,
        Custom2 = "custom2" => sys::ArducamTofWorkMode_ARDUCAM_MODE_CUSTOM2,
        Custom3 = "custom3" => sys::ArducamTofWorkMode_ARDUCAM_MODE_CUSTOM3,
    }
}

c_enum! {
    /// Phase/background composition of one whole frame.
    pub enum TofFrameWorkMode: sys::ArducamTofFrameWorkMode as "frame work mode" {
        SingleFreq2Phase = "single_freq_2phase" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_2PHASE,
        SingleFreq4Phase = "single_freq_4phase" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_4PHASE,
        SingleFreq4PhaseGray = "single_freq_4phase_gray" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_4PHASE_GRAY,
        SingleFreq4PhaseBg = "single_freq_4phase_bg" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_4PHASE_BG,
        SingleFreq4Phase4Bg = "single_freq_4phase_4bg" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_4PHASE_4BG,
        SingleFreq4PhaseGray5Bg = "single_freq_4phase_gray_5bg" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_4PHASE_GRAY_5BG,
        SingleFreqGrayBg4PhaseGrayBg = "single_freq_gray_bg_4phase_gray_bg" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_GRAY_BG_4PHASE_GRAY_BG,
        SingleFreqGrayBg4PhaseBg = "single_freq_gray_bg_4phase_bg" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_GRAY_BG_4PHASE_BG,
        SingleFreqBgGrayBg4Phase = "single_freq_bg_gray_bg_4phase" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_BG_GRAY_BG_4PHASE,
        SingleFreqBg4PhaseBgGray = "single_freq_bg_4phase_bg_gray" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_SINGLE_FREQ_BG_4PHASE_BG_GRAY,
        DoubleFreq4Phase = "double_freq_4phase" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_DOUBLE_FREQ_4PHASE,
        DoubleFreq4PhaseGray4PhaseBg = "double_freq_4phase_gray_4phase_bg" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_DOUBLE_FREQ_4PHASE_GRAY_4PHASE_BG,
        DoubleFreq4Phase4Bg = "double_freq_4phase_4bg" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_DOUBLE_FREQ_4PHASE_4BG,
        DoubleFreq4PhaseGray5Bg = "double_freq_4phase_gray_5bg" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_DOUBLE_FREQ_4PHASE_GRAY_5BG,
        TripleFreq4Phase = "triple_freq_4phase" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_TRIPLE_FREQ_4PHASE,
        TripleFreq4PhaseGray4PhaseGray4PhaseBg = "triple_freq_4phase_gray_4phase_gray_4phase_bg" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_TRIPLE_FREQ_4PHASE_GRAY_4PHASE_GRAY_4PHASE_BG,
        QuadFreq4Phase = "quad_freq_4phase" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_QUAD_FREQ_4PHASE,
        QuadFreq4PhaseGray4PhaseBg4PhaseGray4PhaseBg = "quad_freq_4phase_gray_4phase_bg_4phase_gray_4phase_bg" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_QUAD_FREQ_4PHASE_GRAY_4PHASE_BG_4PHASE_GRAY_4PHASE_BG,
        BgOutdoor = "bg_outdoor" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_BG_OUTDOOR,
        GrayOnly = "gray_only" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_GRAY_ONLY,
        Custom = "custom" => sys::ArducamTofFrameWorkMode_ARDUCAM_SUBMODE_CUSTOM,
    }
}

impl TofWorkMode {
    /// Number of modulation frequencies used per frame, if the mode fixes one.
    pub fn frequency_count(self) -> Option<u32> {
        match self {
            TofWorkMode::SingleFreq => Some(1),
            TofWorkMode::DoubleFreq => Some(2),
            TofWorkMode::TripleFreq => Some(3),
            TofWorkMode::QuadFreq => Some(4),
            _ => None,
        }
    }
}
