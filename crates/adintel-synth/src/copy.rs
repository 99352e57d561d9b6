//! Ad copy templates keyed by (theme, tone).
//!
//! Lookup is layered: the exact (theme, tone) cell first, then any tone
//! registered for the theme, then a generic placeholder. The chain is an
//! ordered sequence of attempts so a catalog theme with sparse copy
//! coverage can never make generation fail.

use rand::Rng;

use crate::Tone;

/// One headline/body template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyPair {
    pub headline: &'static str,
    pub body: &'static str,
}

struct CopyCell {
    theme: &'static str,
    tone: Tone,
    pairs: &'static [CopyPair],
}

/// Used when a theme has no copy registered at all.
pub const GENERIC_COPY: CopyPair = CopyPair {
    headline: "Check Our Latest Offer",
    body: "Discover our newest product range. Limited time availability.",
};

/// Return the candidate pool for a (theme, tone) pair, walking the fallback
/// chain in order and stopping at the first non-empty layer. The final layer
/// is the generic placeholder, so the result is never empty.
pub fn lookup_candidates(theme: &str, tone: Tone) -> Vec<&'static CopyPair> {
    let layers = [
        pairs_where(|cell| cell.theme == theme && cell.tone == tone),
        pairs_where(|cell| cell.theme == theme),
        vec![&GENERIC_COPY],
    ];

    layers
        .into_iter()
        .find(|layer| !layer.is_empty())
        .unwrap_or_else(|| vec![&GENERIC_COPY])
}

/// Pick one headline/body pair uniformly from the fallback chain's first
/// non-empty layer.
pub fn pick_copy<R: Rng + ?Sized>(theme: &str, tone: Tone, rng: &mut R) -> CopyPair {
    let candidates = lookup_candidates(theme, tone);
    *candidates[rng.random_range(0..candidates.len())]
}

fn pairs_where(matches: impl Fn(&CopyCell) -> bool) -> Vec<&'static CopyPair> {
    COPY_BANK
        .iter()
        .filter(|cell| matches(cell))
        .flat_map(|cell| cell.pairs.iter())
        .collect()
}

macro_rules! pairs {
    ($(($headline:expr, $body:expr)),+ $(,)?) => {
        &[$(CopyPair { headline: $headline, body: $body }),+]
    };
}

static COPY_BANK: &[CopyCell] = &[
    // hair_loss
    CopyCell {
        theme: "hair_loss",
        tone: Tone::Fear,
        pairs: pairs![
            ("Losing More Hair Every Day?", "Don't ignore the signs. DHT-blocking formula clinically proven to stop hair fall in 4 weeks. Start your hair recovery today."),
            ("Your Hair Is Thinning — Act Now", "Every shower drain tells a story. Reclaim fuller, thicker hair before it's too late. Dermatologist-recommended solution inside."),
        ],
    },
    CopyCell {
        theme: "hair_loss",
        tone: Tone::Aspiration,
        pairs: pairs![
            ("The Mane You Always Wanted", "Science-backed hair growth serum trusted by 5 lakh+ Indian men. See visible density in just 8 weeks."),
            ("Thick Hair. Confident You.", "Biotin + Redensyl + Anagain — the triple-action formula that brings your hair back to life."),
        ],
    },
    CopyCell {
        theme: "hair_loss",
        tone: Tone::Trust,
        pairs: pairs![
            ("Clinically Tested. Dermatologist Approved.", "Our DHT blocker has 3 published studies backing its efficacy. No harsh chemicals. No side effects."),
            ("4.7★ from 18,000 Real Users", "Men across India trust this formula for hair regrowth. Read their unfiltered reviews before you decide."),
        ],
    },
    CopyCell {
        theme: "hair_loss",
        tone: Tone::Urgency,
        pairs: pairs![
            ("Only 200 Hair Kits Left — 40% Off", "Monsoon hair fall season is here. Grab the complete 3-month kit before stock runs out."),
            ("Flash Sale: Hair Growth Kit ₹999", "Price goes back to ₹1,899 at midnight. 72 hrs only."),
        ],
    },
    CopyCell {
        theme: "hair_loss",
        tone: Tone::SocialProof,
        pairs: pairs![
            ("10 Lakh Men Can't Be Wrong", "Join India's largest men's hair wellness community. Real results, real people — see the before & afters."),
            ("Ranveer's Hair Secret? This Kit.", "Thousands of men share their transformation. Now it's your turn."),
        ],
    },
    CopyCell {
        theme: "hair_loss",
        tone: Tone::Humor,
        pairs: pairs![
            ("Hair Today, Here Tomorrow (If You Act Fast)", "Receding hairline? We've got a plan. Spoiler: it's not a hat."),
            ("Your Comb Called. It Misses You.", "Stop finding excuses. Start finding your hair. Our growth serum works."),
        ],
    },
    // energy
    CopyCell {
        theme: "energy",
        tone: Tone::Fear,
        pairs: pairs![
            ("Still Tired at 3PM?", "Afternoon energy crashes are ruining your productivity. B12 + Iron + Ashwagandha complex designed for all-day stamina."),
            ("Caffeine Is a Bandage, Not a Fix", "Hiding fatigue behind coffee? Discover the root cause and fix it with targeted micronutrients."),
        ],
    },
    CopyCell {
        theme: "energy",
        tone: Tone::Aspiration,
        pairs: pairs![
            ("Feel Unstoppable from 6AM to 10PM", "Elite energy stack: CoQ10 + Shilajit + Vitamin D3. No jitters. No crash. Just clean power."),
            ("Your Best Day Starts Here", "Wake up refreshed, stay sharp all day. Clinically dosed formula for sustained vitality."),
        ],
    },
    CopyCell {
        theme: "energy",
        tone: Tone::Trust,
        pairs: pairs![
            ("FSSAI Certified. Lab Tested. Safe.", "Every batch of our energy supplement is third-party tested for purity and potency."),
            ("Formulated by IIT-Alumni Nutritionists", "Science, not hype. Our energy blend is peer-reviewed and physician-recommended."),
        ],
    },
    CopyCell {
        theme: "energy",
        tone: Tone::Urgency,
        pairs: pairs![
            ("Monsoon Offer: Buy 2 Get 1 Free", "Stock running low. Grab your 3-month energy supply at 33% off before it sells out."),
            ("48-Hour Flash: Energy Kit at ₹799", "Regular price ₹1,299. Sale ends Sunday midnight. Tap to claim."),
        ],
    },
    CopyCell {
        theme: "energy",
        tone: Tone::SocialProof,
        pairs: pairs![
            ("8 Lakh Customers. 4.6 Stars.", "India's fastest-growing energy supplement. Trusted by working professionals, athletes, and new moms."),
            ("Priya Lost Her 3PM Slump in 2 Weeks", "Read how 50,000 women ditched their caffeine dependency with this daily capsule."),
        ],
    },
    CopyCell {
        theme: "energy",
        tone: Tone::Humor,
        pairs: pairs![
            ("Coffee Has Left the Chat", "Introducing the upgrade your energy levels have been waiting for. No side-eyes from your barista."),
            ("Warning: May Cause Excessive Productivity", "Side effects include finishing your to-do list, surprising your boss, and annoying your lazier colleagues."),
        ],
    },
    // immunity
    CopyCell {
        theme: "immunity",
        tone: Tone::Fear,
        pairs: pairs![
            ("Sick Again This Season?", "Frequent colds signal a weakened immune system. Zinc + Vitamin C + Elderberry — the immunity trio that works."),
            ("Your Family's Shield Is Low", "Post-pandemic immunity gaps are real. Don't wait for the next viral wave to act."),
        ],
    },
    CopyCell {
        theme: "immunity",
        tone: Tone::Aspiration,
        pairs: pairs![
            ("Build a Body That Fights Back", "365-day immunity formula with 12 clinically proven botanicals. Feel invincible, naturally."),
            ("Strong Immunity. Stronger Family.", "When you're healthy, everyone thrives. Start the family immunity ritual today."),
        ],
    },
    CopyCell {
        theme: "immunity",
        tone: Tone::Trust,
        pairs: pairs![
            ("AYUSH-Approved Immunity Booster", "Rooted in Ayurveda, proven by science. 6 clinical trials. Trusted by 20 lakh families."),
            ("Pediatrician Recommended for Kids 2+", "Safe, gentle, effective. Formulated with child nutritionists for growing immune systems."),
        ],
    },
    CopyCell {
        theme: "immunity",
        tone: Tone::Urgency,
        pairs: pairs![
            ("Season Change Alert — Protect Now", "Weather shifts weaken immunity. Limited-time 30-day immunity kit at 45% off."),
            ("Back-to-School Immunity Pack — Only ₹499", "Expiry: this Sunday. Get your kids school-ready and germ-proof."),
        ],
    },
    CopyCell {
        theme: "immunity",
        tone: Tone::SocialProof,
        pairs: pairs![
            ("15 Lakh Families Trust This Formula", "India's #1 kids immunity brand for 3 years running. See what parents are saying."),
            ("Viral: Mom's 12-Month Immunity Challenge", "She gave her kids this daily — zero sick days in a year. Watch her story."),
        ],
    },
    CopyCell {
        theme: "immunity",
        tone: Tone::Humor,
        pairs: pairs![
            ("Germs, Consider Yourself Warned", "Our immunity stack didn't come to play. Neither did your kid's white blood cells — with this formula."),
            ("The Only Time 'Going Viral' Is Bad", "Upgrade your family's firewall. No subscription required."),
        ],
    },
    // weight
    CopyCell {
        theme: "weight",
        tone: Tone::Fear,
        pairs: pairs![
            ("Stubborn Belly Fat Won't Budge?", "Hours at the gym, strict diet — and still no results? Metabolic blockers might be the hidden culprit."),
            ("Yo-Yo Dieting Is Damaging Your Metabolism", "Every crash diet makes the next one harder. Break the cycle with a science-backed approach."),
        ],
    },
    CopyCell {
        theme: "weight",
        tone: Tone::Aspiration,
        pairs: pairs![
            ("Your Dream Body Is 12 Weeks Away", "Clinically studied fat metabolism formula + personalized nutrition coaching. Real results, not shortcuts."),
            ("Confident. Fit. Radiant.", "Lose the weight you've been carrying — literally and figuratively. 30,000 women already have."),
        ],
    },
    CopyCell {
        theme: "weight",
        tone: Tone::Trust,
        pairs: pairs![
            ("ICMR-Aligned Nutrition Formula", "Developed by registered dietitians. No banned substances. Transparent ingredient labeling."),
            ("Backed by 3 RCTs. Not Just Testimonials.", "Our weight management protocol has clinical evidence behind every claim. Read the studies."),
        ],
    },
    CopyCell {
        theme: "weight",
        tone: Tone::Urgency,
        pairs: pairs![
            ("New Year Kit: 40% Off Ends Tonight", "Your health resolution deserves real support. Grab the 90-day transformation kit before midnight."),
            ("Summer Body Sale — 3 Days Left", "₹2,499 kit now ₹1,499. Includes meal plan + app access. Hurry."),
        ],
    },
    CopyCell {
        theme: "weight",
        tone: Tone::SocialProof,
        pairs: pairs![
            ("Sunita Lost 11kg in 4 Months", "No starvation. No gym dependency. Real food, smart supplements, lasting change."),
            ("30,000 Women Transformed. You're Next.", "See the before-and-afters, read the reviews — then decide."),
        ],
    },
    CopyCell {
        theme: "weight",
        tone: Tone::Humor,
        pairs: pairs![
            ("Your Jeans Called. They Want a Reunion.", "We can help. Science-backed, dietitian-approved, salad-not-required approach to fat loss."),
            ("Plot Twist: Your Metabolism Isn't Broken", "It just needs the right support. Here's what 30,000 women discovered."),
        ],
    },
    // performance
    CopyCell {
        theme: "performance",
        tone: Tone::Fear,
        pairs: pairs![
            ("Low Testosterone Is More Common Than You Think", "Fatigue, low drive, poor recovery — classic signs most men ignore. Get checked. Get supported."),
            ("Are You Training Hard But Recovering Slow?", "Overtraining without the right micronutrients leads to hormonal imbalance. Fix the root cause."),
        ],
    },
    CopyCell {
        theme: "performance",
        tone: Tone::Aspiration,
        pairs: pairs![
            ("Peak Performance. Every. Single. Day.", "Ashwagandha KSM-66 + Shilajit + D3 + Zinc. The elite men's performance stack."),
            ("Be the Man You Were Built to Be", "Naturally optimized testosterone. Sharper focus. Better recovery. Relentless energy."),
        ],
    },
    CopyCell {
        theme: "performance",
        tone: Tone::Trust,
        pairs: pairs![
            ("KSM-66 Ashwagandha — 24 Clinical Studies", "The most-studied adaptogen in men's health. Proven to raise testosterone, lower cortisol."),
            ("Endorsed by 500+ Sports Nutritionists in India", "Formulated to WADA guidelines. Safe for competitive athletes."),
        ],
    },
    CopyCell {
        theme: "performance",
        tone: Tone::Urgency,
        pairs: pairs![
            ("Pre-Monsoon Performance Sale — 50% Off", "Limited stock of our bestselling T-booster kit. Don't let sluggish energy win."),
            ("72-Hour Flash: Shilajit + Ashwagandha Combo ₹1,199", "Normally ₹2,199. Grab it while the sale lasts."),
        ],
    },
    CopyCell {
        theme: "performance",
        tone: Tone::SocialProof,
        pairs: pairs![
            ("Vikram Gained 4kg Lean Muscle in 8 Weeks", "No steroids. No shortcuts. Just the right natural support stack. See his journey."),
            ("India's #1 Men's Performance Supplement 2024", "Voted by 2 lakh men. 4.8 stars. The numbers speak for themselves."),
        ],
    },
    CopyCell {
        theme: "performance",
        tone: Tone::Humor,
        pairs: pairs![
            ("Your Gym Bag Is Ready. Is Your Testosterone?", "Don't let micronutrient gaps sabotage your gains. Upgrade the tank, not just the engine."),
            ("Dad Strength Is Real. Science Just Made It Realer.", "Natural T-support for men who have real-life demands — and refuse to slow down."),
        ],
    },
    // confidence
    CopyCell {
        theme: "confidence",
        tone: Tone::Fear,
        pairs: pairs![
            ("Self-Doubt Is a Silent Saboteur", "Anxiety and low confidence often stem from nutritional deficiencies. Magnesium + B-Complex changes the equation."),
            ("Are You Showing Up as Your Best Self?", "Chronic stress depletes the micronutrients that fuel mental clarity and self-assurance."),
        ],
    },
    CopyCell {
        theme: "confidence",
        tone: Tone::Aspiration,
        pairs: pairs![
            ("Walk Into Every Room Like You Own It", "Adaptogen-powered mood support. Stress down. Confidence up. You, at 100%."),
            ("Radiate From the Inside Out", "When your body feels balanced, your confidence follows. Start the daily ritual."),
        ],
    },
    CopyCell {
        theme: "confidence",
        tone: Tone::Trust,
        pairs: pairs![
            ("Clinically Proven to Reduce Cortisol by 27%", "Ashwagandha KSM-66 in our formula is backed by peer-reviewed research on stress and wellbeing."),
            ("Formulated with Integrative Psychiatrists", "Mental wellness meets nutritional science. Evidence-based. Safe. Effective."),
        ],
    },
    CopyCell {
        theme: "confidence",
        tone: Tone::Urgency,
        pairs: pairs![
            ("Confidence Kit: Flash Sale Ends in 12 Hours", "Our bestselling mood + energy bundle — 35% off for the next 12 hours only."),
            ("Only 300 Kits Left at This Price", "Grab it before it's gone. Your best self is waiting."),
        ],
    },
    CopyCell {
        theme: "confidence",
        tone: Tone::SocialProof,
        pairs: pairs![
            ("'I Finally Feel Like Myself Again' — Neha, 32", "20,000 women share their confidence transformation. See what changed for them."),
            ("Top-Rated Wellness Supplement on Trustpilot India", "4.9/5 stars. 12,000 verified reviews. Real people. Real change."),
        ],
    },
    CopyCell {
        theme: "confidence",
        tone: Tone::Humor,
        pairs: pairs![
            ("Imposter Syndrome: Meet Your Match", "Science-backed confidence support. For when 'fake it till you make it' has officially run its course."),
            ("Confidence — Now Available in Capsule Form (Kind Of)", "Okay, it's not magic. But 28 days in, you'll swear it is."),
        ],
    },
    // parenting
    CopyCell {
        theme: "parenting",
        tone: Tone::Fear,
        pairs: pairs![
            ("Is Your Child Getting Enough Nutrition?", "85% of Indian kids are deficient in at least one key micronutrient. Don't let gaps affect their development."),
            ("Screen Time Is Up. Attention Span Is Down.", "Support your child's focus and cognitive development with the nutrients their growing brain needs."),
        ],
    },
    CopyCell {
        theme: "parenting",
        tone: Tone::Aspiration,
        pairs: pairs![
            ("Raise Curious, Thriving Kids", "DHA + Choline + Iron — the brain development trio pediatricians recommend from Year 1."),
            ("Every Parent's Dream: A Healthy, Happy Child", "Our kids' wellness range is designed to make nutrition simple, safe, and something kids actually enjoy."),
        ],
    },
    CopyCell {
        theme: "parenting",
        tone: Tone::Trust,
        pairs: pairs![
            ("Recommended by 10,000 Pediatricians in India", "Safe from 2 years. No artificial colors. No added sugar. FSSAI certified."),
            ("Moms Love It. Pediatricians Approve It.", "3rd-party lab tested, allergen-labeled, and formulated specifically for Indian children's dietary needs."),
        ],
    },
    CopyCell {
        theme: "parenting",
        tone: Tone::Urgency,
        pairs: pairs![
            ("Back-to-School Nutrition Kit — Limited Stock", "School season is here. Grab the complete 30-day kids' nutrition kit before it sells out."),
            ("Monsoon Immunity Sale: 40% Off Kids Range", "Protect your child through season change. Offer valid while stocks last."),
        ],
    },
    CopyCell {
        theme: "parenting",
        tone: Tone::SocialProof,
        pairs: pairs![
            ("2 Million Happy Moms and Counting", "India's most trusted kids' wellness brand — rated 4.8 stars by verified parents nationwide."),
            ("Priya's Son Went from Picky Eater to Nutrition Champion", "How one mom transformed mealtimes and filled the nutrient gaps. Watch her story."),
        ],
    },
    CopyCell {
        theme: "parenting",
        tone: Tone::Humor,
        pairs: pairs![
            ("Finally: A Supplement Your Kids Won't Spit Out", "Mango flavored. Sneakily nutritious. Parents approved; kids obsessed."),
            ("Vegetables? Overrated. Micronutrients? Essential.", "When broccoli is a war zone, we've got backup. 12 essential nutrients. Zero arguments."),
        ],
    },
    // safety
    CopyCell {
        theme: "safety",
        tone: Tone::Fear,
        pairs: pairs![
            ("Not All Baby Products Are as Safe as They Claim", "Hidden parabens and sulfates in 'gentle' products. Always check what's in your baby's skincare."),
            ("Your Baby's Skin Is 5x More Permeable Than Yours", "Toxins absorb faster. Demand higher safety standards. Choose clinically tested baby care."),
        ],
    },
    CopyCell {
        theme: "safety",
        tone: Tone::Aspiration,
        pairs: pairs![
            ("Pure. Gentle. Safe from Day One.", "Dermatologist-tested, hypoallergenic baby care range. Because your baby deserves nothing less."),
            ("The Gold Standard in Baby Safety", "EWG Verified. EU Compliant. Free from 1300+ harmful chemicals. Peace of mind, bottled."),
        ],
    },
    CopyCell {
        theme: "safety",
        tone: Tone::Trust,
        pairs: pairs![
            ("Dermatologist Tested on Sensitive Newborn Skin", "Our formulas undergo clinical patch testing on the most delicate skin type — your newborn's."),
            ("Certified Safe by European Pediatric Dermatology Society", "When it comes to your baby, over-qualified beats under-tested every time."),
        ],
    },
    CopyCell {
        theme: "safety",
        tone: Tone::Urgency,
        pairs: pairs![
            ("Baby Safety Kit — New Season, New Formula", "Upgraded formulation with added ceramides. Introductory price valid for the first 500 orders."),
            ("Limited Edition: Monsoon Baby Care Bundle ₹799", "Everything your baby needs through the damp season. Grab before it's gone."),
        ],
    },
    CopyCell {
        theme: "safety",
        tone: Tone::SocialProof,
        pairs: pairs![
            ("50 Lakh Moms Trust This Brand", "India's most recommended baby care range for sensitive skin. 4 national parenting awards."),
            ("Hospital-Preferred Brand in 200+ NICU Units", "When hospitals choose us for newborns, that's the safety signal parents trust."),
        ],
    },
    CopyCell {
        theme: "safety",
        tone: Tone::Humor,
        pairs: pairs![
            ("Your Baby Can't Read Ingredient Labels. We Did It for Them.", "Zero parabens. Zero sulfates. Zero nonsense. 100% for the tiny human who runs your life."),
            ("NICU-Safe Means Parent-Approved Overkill (You're Welcome)", "We went above and beyond so you don't have to wonder. Just enjoy the baby smell."),
        ],
    },
];
