use proptest::prelude::*;
use serde_json::json;

use rtb_envelope::openrtb::{
    App, BidRequest, Deal, Device, Extension, Impression, Pmp, Regulations, Site, Source, User,
};

fn string_list() -> impl Strategy<Value = Option<Vec<String>>> {
    prop::option::of(prop::collection::vec("[a-zA-Z0-9.]{1,12}", 0..4))
}

fn impressions() -> impl Strategy<Value = Vec<Impression>> {
    prop::collection::vec("[0-9]{1,3}", 0..4).prop_map(|ids| {
        ids.into_iter()
            .map(|id| Impression {
                id,
                ..Default::default()
            })
            .collect()
    })
}

fn pmp() -> impl Strategy<Value = Option<Pmp>> {
    prop::option::of(
        (0..2i32, prop::collection::vec(("[a-z]{1,6}", 0.0..10.0f64), 0..3)).prop_map(
            |(private_auction, deals)| Pmp {
                private_auction,
                deals: deals
                    .into_iter()
                    .map(|(id, bidfloor)| Deal {
                        id,
                        bidfloor,
                        ..Default::default()
                    })
                    .collect(),
                ext: None,
            },
        ),
    )
}

prop_compose! {
    fn scalars()(
        test in 0..2i32,
        at in prop_oneof![Just(1), Just(2), 501..600i32],
        tmax in prop::option::of(-1..1000i64),
        allimps in 0..2i32,
    ) -> (i32, i32, Option<i64>, i32) {
        (test, at, tmax, allimps)
    }
}

prop_compose! {
    fn bid_request()(
        id in "[a-z0-9-]{0,12}",
        imp in impressions(),
        site in prop::option::of("[a-z]{1,10}\\.com"),
        app in prop::option::of("com\\.[a-z]{1,10}"),
        with_context in any::<bool>(),
        (test, at, tmax, allimps) in scalars(),
        lists in prop::collection::vec(string_list(), 7),
        with_ext in any::<bool>(),
        pmp in pmp(),
    ) -> BidRequest {
        let mut lists = lists.into_iter();
        let mut next = move || lists.next().flatten();
        BidRequest {
            id,
            imp,
            site: site.map(|domain| Site { domain: Some(domain), ..Default::default() }),
            app: app.map(|bundle| App { bundle: Some(bundle), ..Default::default() }),
            device: with_context.then(|| Device { ua: Some("ua".to_string()), ..Default::default() }),
            user: with_context.then(|| User { id: Some("u".to_string()), ..Default::default() }),
            source: with_context.then(|| Source { fd: Some(1), ..Default::default() }),
            regs: with_context.then(|| Regulations { coppa: Some(0), ..Default::default() }),
            test,
            at,
            tmax,
            wseat: next(),
            bseat: next(),
            wlang: next(),
            allimps,
            cur: next(),
            bcat: next(),
            badv: next(),
            bapp: next(),
            ext: with_ext.then(|| Extension::new(json!({"k": "v"}))),
            pmp,
        }
    }
}

fn push(list: &mut Option<Vec<String>>) {
    list.get_or_insert_with(Vec::new).push("mutated".to_string());
}

proptest! {
    #[test]
    fn copy_equals_original(req in bid_request()) {
        let cp = req.copy();
        prop_assert_eq!(&cp, &req);
        prop_assert_eq!(&cp.id, &req.id);
        prop_assert_eq!(cp.test, req.test);
        prop_assert_eq!(cp.at, req.at);
        prop_assert_eq!(cp.tmax, req.tmax);
        prop_assert_eq!(cp.allimps, req.allimps);
    }

    #[test]
    fn copy_keeps_presence(req in bid_request()) {
        let cp = req.copy();
        prop_assert_eq!(cp.site.is_some(), req.site.is_some());
        prop_assert_eq!(cp.app.is_some(), req.app.is_some());
        prop_assert_eq!(cp.device.is_some(), req.device.is_some());
        prop_assert_eq!(cp.pmp.is_some(), req.pmp.is_some());
        prop_assert_eq!(cp.wseat.is_some(), req.wseat.is_some());
        prop_assert_eq!(cp.bapp.is_some(), req.bapp.is_some());
        if let (Some(a), Some(b)) = (&cp.ext, &req.ext) {
            prop_assert!(a.ptr_eq(b));
        }
    }

    #[test]
    fn mutating_copy_leaves_original(req in bid_request()) {
        let before = req.clone();
        let mut cp = req.copy();

        cp.id.push('x');
        cp.imp.push(Impression { id: "new".to_string(), ..Default::default() });
        for imp in cp.imp.iter_mut() {
            imp.bidfloor = 99.0;
        }
        if let Some(site) = cp.site.as_mut() {
            site.domain = None;
        }
        if let Some(app) = cp.app.as_mut() {
            app.bundle = None;
        }
        if let Some(device) = cp.device.as_mut() {
            device.ua = None;
        }
        cp.user = None;
        if let Some(pmp) = cp.pmp.as_mut() {
            pmp.deals.push(Deal { id: "extra".to_string(), ..Default::default() });
            pmp.private_auction = 7;
        }
        push(&mut cp.wseat);
        push(&mut cp.bseat);
        push(&mut cp.wlang);
        push(&mut cp.cur);
        push(&mut cp.bcat);
        push(&mut cp.badv);
        push(&mut cp.bapp);

        prop_assert_eq!(req, before);
    }

    #[test]
    fn mutating_original_leaves_copy(req in bid_request()) {
        let mut req = req;
        let cp = req.copy();
        let snapshot = cp.clone();

        req.imp.clear();
        push(&mut req.bcat);
        if let Some(pmp) = req.pmp.as_mut() {
            pmp.deals.clear();
        }
        req.site = None;

        prop_assert_eq!(cp, snapshot);
    }

    #[test]
    fn validate_does_not_mutate(req in bid_request()) {
        let before = req.clone();
        let _ = req.validate();
        prop_assert_eq!(req, before);
    }
}
