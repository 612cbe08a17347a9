//! End-to-end swap scenarios.
//!
//! Mirrors a typical deployment: two mock tokens minted to the deployer,
//! an `OrderSwap` owned by the deployer, and a second account acting as
//! filler.

use order_swap::error::{AllowanceError, StateError, TransferError, ValidationError};
use order_swap::types::units::parse_units;
use order_swap::types::{OrderFulfilled, SwapEvent};
use order_swap::{
    Address, Amount, Erc20Token, FungibleToken, InMemoryLedger, OrderParams, OrderSwap, SwapError,
    TokenLedger,
};

// ============================================================================
// FIXTURE
// ============================================================================

struct Deployment {
    swap: OrderSwap,
    ledger: InMemoryLedger,
    token_one: Address,
    token_two: Address,
    owner: Address,
    addr1: Address,
}

fn ether(s: &str) -> Amount {
    parse_units(s, 18).expect("valid amount")
}

/// Deploy both tokens (1000 units each to the owner) and the swap.
fn deploy() -> Deployment {
    let owner = Address::derive(b"owner");
    let addr1 = Address::derive(b"addr1");

    let mut ledger = InMemoryLedger::new();
    let token_one = ledger.deploy(Address::derive(b"Mock20Token"), Erc20Token::new("Mock20Token", "MTK", 18));
    let token_two = ledger.deploy(Address::derive(b"LW3Token"), Erc20Token::new("LW3Token", "LW3", 18));
    ledger.mint(token_one, owner, ether("1000")).unwrap();
    ledger.mint(token_two, owner, ether("1000")).unwrap();

    Deployment {
        swap: OrderSwap::new(Address::derive(b"OrderBasedSwap"), owner),
        ledger,
        token_one,
        token_two,
        owner,
        addr1,
    }
}

impl Deployment {
    fn approve(&mut self, token: Address, holder: Address, amount: Amount) {
        let spender = self.swap.address();
        self.ledger.approve(token, holder, spender, amount).unwrap();
    }

    fn create(&mut self, maker: Address, sell: Amount, buy: Amount) -> Result<u64, SwapError> {
        let params = OrderParams::new(self.token_one, self.token_two, sell, buy);
        self.swap.create_order(&self.ledger, maker, params)
    }

    fn balance(&self, token: Address, account: Address) -> Amount {
        self.ledger.balance_of(token, account).unwrap()
    }
}

// ============================================================================
// DEPLOYMENT
// ============================================================================

#[test]
fn sets_the_correct_owner() {
    let d = deploy();
    assert_eq!(d.swap.owner(), d.owner);
}

// ============================================================================
// CREATING AN ORDER
// ============================================================================

#[test]
fn creates_an_order() {
    let mut d = deploy();
    d.approve(d.token_one, d.owner, ether("1"));

    d.create(d.owner, ether("1"), ether("1")).unwrap();

    assert_eq!(d.swap.order_count(), 1);
    let order = d.swap.orders(0).unwrap();
    assert!(!order.fulfilled);
    assert_eq!(order.maker(), d.owner);
    assert_eq!(order.sell_amount, ether("1"));
}

#[test]
fn rejects_without_allowance() {
    let mut d = deploy();

    let err = d.create(d.owner, ether("1"), ether("1")).unwrap_err();

    assert_eq!(err, SwapError::Allowance(AllowanceError::InsufficientAllowance));
    assert_eq!(err.to_string(), "Insufficient allowance");
    assert_eq!(d.swap.order_count(), 0);
}

#[test]
fn rejects_same_tokens() {
    let mut d = deploy();
    let params = OrderParams::new(d.token_one, d.token_one, ether("1"), ether("1"));

    let err = d.swap.create_order(&d.ledger, d.owner, params).unwrap_err();

    assert_eq!(err, SwapError::Validation(ValidationError::SameToken));
    assert_eq!(err.to_string(), "Sell and buy tokens must be different");
}

#[test]
fn rejects_zero_amounts() {
    let mut d = deploy();

    let err = d.create(d.owner, 0, 0).unwrap_err();

    assert_eq!(err, SwapError::Validation(ValidationError::ZeroAmount));
    assert_eq!(err.to_string(), "Amounts must be greater than zero");
}

#[test]
fn ids_follow_creation_order() {
    let mut d = deploy();
    d.approve(d.token_one, d.owner, ether("100"));

    for expected in 0..25u64 {
        let id = d.create(d.owner, ether("1"), ether("2")).unwrap();
        assert_eq!(id, expected);
    }

    assert_eq!(d.swap.order_count(), 25);
    // Allowance is checked, not consumed, at creation
    assert_eq!(d.ledger.allowance(d.token_one, d.owner, d.swap.address()).unwrap(), ether("100"));
}

// ============================================================================
// FILLING AN ORDER
// ============================================================================

#[test]
fn fills_an_order() {
    let mut d = deploy();
    d.approve(d.token_one, d.owner, ether("1"));
    d.approve(d.token_two, d.owner, ether("1"));

    d.create(d.owner, ether("1"), ether("1")).unwrap();
    d.swap.fulfill_order(&mut d.ledger, d.owner, 0).unwrap();

    assert!(d.swap.orders(0).unwrap().fulfilled);
}

#[test]
fn fill_moves_balances_between_parties() {
    let mut d = deploy();
    d.ledger.transfer(d.token_two, d.owner, d.addr1, ether("10")).unwrap();
    d.approve(d.token_one, d.owner, ether("3"));
    d.approve(d.token_two, d.addr1, ether("4"));

    let id = d.create(d.owner, ether("3"), ether("4")).unwrap();
    d.swap.fulfill_order(&mut d.ledger, d.addr1, id).unwrap();

    assert_eq!(d.balance(d.token_one, d.owner), ether("997"));
    assert_eq!(d.balance(d.token_one, d.addr1), ether("3"));
    assert_eq!(d.balance(d.token_two, d.addr1), ether("6"));
    assert_eq!(d.balance(d.token_two, d.owner), ether("994"));

    assert_eq!(
        d.swap.events().last(),
        Some(&SwapEvent::OrderFulfilled(OrderFulfilled::new(id, d.addr1)))
    );

    // Second attempt is rejected and changes nothing
    let root = d.swap.state_root().unwrap();
    let err = d.swap.fulfill_order(&mut d.ledger, d.addr1, id).unwrap_err();
    assert_eq!(err, SwapError::State(StateError::AlreadyFulfilled(id)));
    assert_eq!(err.to_string(), "Order already fulfilled");
    assert_eq!(d.swap.state_root().unwrap(), root);
    assert_eq!(d.balance(d.token_one, d.addr1), ether("3"));
}

#[test]
fn fill_unknown_order() {
    let mut d = deploy();

    let err = d.swap.fulfill_order(&mut d.ledger, d.addr1, 0).unwrap_err();
    assert_eq!(err, SwapError::State(StateError::OrderNotFound(0)));
    assert_eq!(err.to_string(), "Order does not exist");
}

#[test]
fn filler_without_allowance_is_rejected_atomically() {
    let mut d = deploy();
    d.ledger.transfer(d.token_two, d.owner, d.addr1, ether("10")).unwrap();
    d.approve(d.token_one, d.owner, ether("1"));
    let id = d.create(d.owner, ether("1"), ether("1")).unwrap();

    let err = d.swap.fulfill_order(&mut d.ledger, d.addr1, id).unwrap_err();

    assert_eq!(err, SwapError::Allowance(AllowanceError::InsufficientAllowance));
    assert!(!d.swap.orders(id).unwrap().fulfilled);
    assert_eq!(d.balance(d.token_one, d.owner), ether("1000"));
    assert_eq!(d.balance(d.token_one, d.addr1), 0);
    assert_eq!(d.ledger.allowance(d.token_one, d.owner, d.swap.address()).unwrap(), ether("1"));
}

#[test]
fn maker_revoking_allowance_invalidates_order() {
    let mut d = deploy();
    d.ledger.transfer(d.token_two, d.owner, d.addr1, ether("10")).unwrap();
    d.approve(d.token_one, d.owner, ether("1"));
    d.approve(d.token_two, d.addr1, ether("1"));
    let id = d.create(d.owner, ether("1"), ether("1")).unwrap();

    d.approve(d.token_one, d.owner, 0);

    let err = d.swap.fulfill_order(&mut d.ledger, d.addr1, id).unwrap_err();
    assert_eq!(err, SwapError::Allowance(AllowanceError::InsufficientAllowance));
    assert!(d.swap.orders(id).unwrap().is_open());
}

#[test]
fn maker_spending_funds_elsewhere_fails_transfer() {
    let mut d = deploy();
    d.ledger.transfer(d.token_two, d.owner, d.addr1, ether("10")).unwrap();
    d.approve(d.token_one, d.owner, ether("5"));
    d.approve(d.token_two, d.addr1, ether("1"));
    let id = d.create(d.owner, ether("5"), ether("1")).unwrap();

    // Maker moves almost everything away after creating the order
    let elsewhere = Address::derive(b"elsewhere");
    d.ledger.transfer(d.token_one, d.owner, elsewhere, ether("999")).unwrap();

    let err = d.swap.fulfill_order(&mut d.ledger, d.addr1, id).unwrap_err();
    assert_eq!(err, SwapError::Transfer(TransferError::TransferFailed));
    assert_eq!(err.to_string(), "Transfer failed");
    assert_eq!(d.balance(d.token_two, d.addr1), ether("10"));
}

#[test]
fn fulfilled_orders_stay_fulfilled_among_others() {
    let mut d = deploy();
    d.ledger.transfer(d.token_two, d.owner, d.addr1, ether("100")).unwrap();
    d.approve(d.token_one, d.owner, ether("100"));
    d.approve(d.token_two, d.addr1, ether("100"));

    for _ in 0..5 {
        d.create(d.owner, ether("1"), ether("1")).unwrap();
    }
    for id in [1u64, 3] {
        d.swap.fulfill_order(&mut d.ledger, d.addr1, id).unwrap();
    }

    let states: Vec<bool> = (0..5).map(|id| d.swap.orders(id).unwrap().fulfilled).collect();
    assert_eq!(states, vec![false, true, false, true, false]);
    assert_eq!(d.swap.store().open_count(), 3);

    let names: Vec<&str> = d.swap.events().iter().map(|e| e.name()).collect();
    assert_eq!(names.iter().filter(|n| **n == "OrderCreated").count(), 5);
    assert_eq!(names.iter().filter(|n| **n == "OrderFulfilled").count(), 2);
}

#[test]
fn token_interface_is_object_safe() {
    let d = deploy();
    let token: &dyn FungibleToken = d.ledger.token(d.token_one).unwrap();
    assert_eq!(token.balance_of(d.owner), ether("1000"));
}
