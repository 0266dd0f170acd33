//! # VIP Experience
//!
//! Spending diamonds feeds VIP experience. Each tier crossed mails its
//! rewards and may unlock a shop offer; a single large spend that crosses
//! several tiers produces one mail per tier, lowest first.

use summoner_content::{level_for_exp, ContentTables, Cost, VipLevel};

use crate::outbox::{Mail, MailReward, SideEffect};
use crate::state::GameState;

/// Sender shown on VIP reward mail.
pub const SYSTEM_SENDER: &str = "System";

/// Returns a new state with `amount` VIP experience added, plus the reward
/// effects of every tier crossed.
#[must_use]
pub fn add_vip_exp(
    state: &GameState,
    amount: u64,
    content: &ContentTables,
) -> (GameState, Vec<SideEffect>) {
    let mut next = state.clone();
    let effects = credit_vip_exp(&mut next, amount, content);
    (next, effects)
}

/// Working-copy variant used inside larger transitions.
pub(crate) fn credit_vip_exp(
    state: &mut GameState,
    amount: u64,
    content: &ContentTables,
) -> Vec<SideEffect> {
    let exp = state.ledger.add_vip_exp(amount);
    let levels = content.vip_levels();
    let previous = state.vip_level;
    let reached = level_for_exp(levels, exp);
    if reached <= previous {
        return Vec::new();
    }

    state.vip_level = reached;
    tracing::info!(
        player = %state.player.name,
        from = previous,
        to = reached,
        exp,
        "VIP level up"
    );

    let mut effects = Vec::new();
    for tier in levels
        .iter()
        .filter(|tier| tier.level > previous && tier.level <= reached)
    {
        effects.push(SideEffect::SendMail(tier_mail(tier, content)));
        if let Some(offer_id) = &tier.unlock_offer {
            effects.push(SideEffect::TriggerOffer {
                offer_id: offer_id.clone(),
            });
        }
    }
    effects
}

fn tier_mail(tier: &VipLevel, content: &ContentTables) -> Mail {
    let mut rewards: Vec<MailReward> = tier
        .rewards
        .iter()
        .map(|reward| MailReward::Currency(Cost::new(reward.currency, reward.amount)))
        .collect();

    if let Some(pet_id) = &tier.reward_pet {
        match content.pet(pet_id) {
            Some(pet) => rewards.push(MailReward::Pet {
                pet_id: pet.id.clone(),
                name: pet.name.clone(),
            }),
            None => tracing::warn!(pet_id = %pet_id, level = tier.level, "VIP reward pet missing"),
        }
    }

    Mail {
        title: format!("VIP {} Reached!", tier.level),
        body: format!(
            "Congratulations on reaching VIP {}! Your tier rewards are attached.",
            tier.level
        ),
        sender: SYSTEM_SENDER.to_string(),
        rewards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summoner_content::Currency;

    const LADDER: &str = r#"
[[pets]]
id = "pet_owl"
name = "Owl"
rarity = "sr"

[[vip_levels]]
level = 1
exp_required = 100
rewards = [{ currency = "diamonds", amount = 100 }]

[[vip_levels]]
level = 2
exp_required = 1000
rewards = [{ currency = "hero_ticket", amount = 2 }]
unlock_offer = "vip2_pack"

[[vip_levels]]
level = 3
exp_required = 5000
reward_pet = "pet_owl"
"#;

    fn content() -> ContentTables {
        ContentTables::from_toml_str(LADDER).unwrap()
    }

    fn mails(effects: &[SideEffect]) -> Vec<&Mail> {
        effects
            .iter()
            .filter_map(|e| match e {
                SideEffect::SendMail(mail) => Some(mail),
                SideEffect::TriggerOffer { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_below_first_tier_no_effects() {
        let content = content();
        let (next, effects) = add_vip_exp(&GameState::new("Mira"), 99, &content);
        assert_eq!(next.vip_level, 0);
        assert_eq!(next.ledger.vip_exp(), 99);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_single_tier_mail() {
        let content = content();
        let (next, effects) = add_vip_exp(&GameState::new("Mira"), 300, &content);

        assert_eq!(next.vip_level, 1);
        assert_eq!(effects.len(), 1);
        let mail = mails(&effects)[0];
        assert_eq!(mail.sender, "System");
        assert!(mail.title.contains("VIP 1"));
        assert_eq!(
            mail.rewards,
            vec![MailReward::Currency(Cost::new(Currency::Diamonds, 100))]
        );
    }

    #[test]
    fn test_multi_tier_jump_mails_each_tier() {
        let content = content();
        let (next, effects) = add_vip_exp(&GameState::new("Mira"), 6000, &content);

        assert_eq!(next.vip_level, 3);
        let mails = mails(&effects);
        assert_eq!(mails.len(), 3);
        assert!(mails[0].title.contains("VIP 1"));
        assert!(mails[2].title.contains("VIP 3"));
        assert_eq!(
            mails[2].rewards,
            vec![MailReward::Pet { pet_id: "pet_owl".to_string(), name: "Owl".to_string() }]
        );
        assert!(effects.contains(&SideEffect::TriggerOffer { offer_id: "vip2_pack".to_string() }));
    }

    #[test]
    fn test_staying_in_tier_is_silent() {
        let content = content();
        let (state, _) = add_vip_exp(&GameState::new("Mira"), 150, &content);
        let (next, effects) = add_vip_exp(&state, 150, &content);
        assert_eq!(next.vip_level, 1);
        assert_eq!(next.ledger.vip_exp(), 300);
        assert!(effects.is_empty());
    }
}
