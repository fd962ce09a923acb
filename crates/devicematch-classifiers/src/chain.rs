//! The ordered classifier chain.
//!
//! Order is a correctness contract, not a tuning knob: families that
//! embed other families' tokens (Kindle before Android, Opera Mini
//! before the desktop Opera, the bot sweep before every desktop browser)
//! only work because the more specific classifier is asked first. The
//! first classifier whose claim test passes owns the agent for both
//! matching and catalog filtering.

use std::sync::Arc;

use tracing::trace;

use devicematch_core::{DeviceId, Error, Result};

use crate::classifier::Classifier;
use crate::handlers::android::AndroidClassifier;
use crate::handlers::apple::AppleClassifier;
use crate::handlers::catch_all::CatchAllClassifier;
use crate::handlers::desktop::{
    ChromeClassifier, FirefoxClassifier, MsieClassifier, OperaClassifier,
};
use crate::handlers::mobile::{
    BlackBerryClassifier, DoCoMoClassifier, KddiClassifier, LgClassifier, LgPlusClassifier,
    MotorolaClassifier, NecClassifier, NintendoClassifier, NokiaClassifier, NokiaOviClassifier,
    OperaMiniClassifier, PantechClassifier, SamsungClassifier, SanyoClassifier,
    SonyEricssonClassifier, SpvClassifier, WindowsPhoneClassifier,
    WindowsPhoneDesktopClassifier,
};
use crate::handlers::special::{
    BotClassifier, HtcMacClassifier, KindleClassifier, SmartTvClassifier, WebOsClassifier,
};
use crate::handlers::vendor::{
    VendorClassifier, ALCATEL, BENQ, GRUNDIG, HTC, JAVA_MIDLET, KONQUEROR, KYOCERA, MITSUBISHI,
    PANASONIC, PHILIPS, PORTALMMM, QTEK, REKSIO, SAFARI, SAGEM, SHARP, SIEMENS, TOSHIBA, VODAFONE,
};
use crate::markers::{recovery_catch_all, Markers};
use crate::normalizer::generic_chain;
use crate::specific::KonquerorNormalizer;

pub struct ClassifierChain {
    classifiers: Vec<Box<dyn Classifier>>,
    markers: Markers,
}

impl ClassifierChain {
    /// Build a chain from an ordered classifier list. The last entry must
    /// be a catch-all, otherwise some agents would have no owner.
    pub fn new(classifiers: Vec<Box<dyn Classifier>>) -> Result<Self> {
        if !classifiers.last().is_some_and(|c| c.is_catch_all()) {
            return Err(Error::chain("classifier chain must end in a catch-all"));
        }
        Ok(Self {
            classifiers,
            markers: Markers::new()?,
        })
    }

    /// The full production chain.
    pub fn standard() -> Result<Self> {
        let generic = generic_chain()?;
        let vendor = |spec| -> Box<dyn Classifier> {
            Box::new(VendorClassifier::new(spec, generic.clone()))
        };

        Self::new(vec![
            vendor(JAVA_MIDLET),
            Box::new(SmartTvClassifier::new(&generic)),
            Box::new(KindleClassifier::new(&generic)?),
            Box::new(LgPlusClassifier::new(&generic)?),
            Box::new(AndroidClassifier::new(&generic)?),
            Box::new(AppleClassifier::new(&generic)?),
            Box::new(WindowsPhoneDesktopClassifier::new(&generic)),
            Box::new(WindowsPhoneClassifier::new(&generic)),
            Box::new(NokiaOviClassifier::new(&generic)),
            Box::new(NokiaClassifier::new(&generic)),
            Box::new(SamsungClassifier::new(&generic)),
            Box::new(BlackBerryClassifier::new(&generic)?),
            Box::new(SonyEricssonClassifier::new(&generic)),
            Box::new(MotorolaClassifier::new(&generic)),
            vendor(ALCATEL),
            vendor(BENQ),
            Box::new(DoCoMoClassifier::new(&generic)),
            vendor(GRUNDIG),
            Box::new(HtcMacClassifier::new(&generic)?),
            vendor(HTC),
            Box::new(KddiClassifier::new(&generic)),
            vendor(KYOCERA),
            Box::new(LgClassifier::new(&generic)),
            vendor(MITSUBISHI),
            Box::new(NecClassifier::new(&generic)),
            Box::new(NintendoClassifier::new(&generic)),
            vendor(PANASONIC),
            Box::new(PantechClassifier::new(&generic)),
            vendor(PHILIPS),
            vendor(PORTALMMM),
            vendor(QTEK),
            vendor(REKSIO),
            vendor(SAGEM),
            Box::new(SanyoClassifier::new(&generic)),
            vendor(SHARP),
            vendor(SIEMENS),
            Box::new(SpvClassifier::new(&generic)),
            vendor(TOSHIBA),
            vendor(VODAFONE),
            Box::new(WebOsClassifier::new(&generic)?),
            Box::new(OperaMiniClassifier::new(&generic)),
            Box::new(BotClassifier::new(&generic)),
            Box::new(ChromeClassifier::new(&generic)),
            Box::new(FirefoxClassifier::new(&generic)?),
            Box::new(MsieClassifier::new(&generic)?),
            Box::new(OperaClassifier::new(&generic)?),
            vendor(SAFARI),
            Box::new(VendorClassifier::new(
                KONQUEROR,
                generic.with(Arc::new(KonquerorNormalizer)),
            )),
            Box::new(CatchAllClassifier::new(&generic)),
        ])
    }

    /// Classify a raw user agent. Total: every agent, including the empty
    /// string, resolves to some identity.
    pub fn match_ua(&self, ua: &str) -> DeviceId {
        let ctx = self.markers.context(ua);
        for classifier in &self.classifiers {
            if classifier.can_handle(ua, &ctx) {
                trace!(classifier = classifier.name(), "user agent claimed");
                return classifier.apply_match(ua, &ctx, &self.markers);
            }
        }
        recovery_catch_all(ua, &ctx, &self.markers)
    }

    /// Route a reference agent to the index of the classifier that would
    /// claim it at match time.
    pub fn filter(&mut self, ua: &str, device_id: DeviceId) {
        let ctx = self.markers.context(ua);
        for classifier in &mut self.classifiers {
            if classifier.can_handle(ua, &ctx) {
                classifier.filter(ua, device_id);
                return;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }
}
