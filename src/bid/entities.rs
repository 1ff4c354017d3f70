use {
    crate::auction::entities::AuctionId,
    time::OffsetDateTime,
    uuid::Uuid,
};

pub type BidId = Uuid;

/// A bid as submitted by a user, before it has been accepted.
#[derive(Clone, Debug)]
pub struct BidCreate {
    pub auction_id:    AuctionId,
    pub user_id:       String,
    pub amount:        f64,
    pub creation_time: OffsetDateTime,
}

/// An accepted bid. Immutable once stored.
#[derive(Clone, Debug)]
pub struct Bid {
    pub id:            BidId,
    pub auction_id:    AuctionId,
    pub user_id:       String,
    pub amount:        f64,
    pub creation_time: OffsetDateTime,
}

impl Bid {
    pub fn new(bid_create: BidCreate) -> Self {
        Self {
            id:            Uuid::new_v4(),
            auction_id:    bid_create.auction_id,
            user_id:       bid_create.user_id,
            amount:        bid_create.amount,
            creation_time: bid_create.creation_time,
        }
    }
}
